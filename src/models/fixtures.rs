//! Fixture payloads
//!
//! Static request bodies and filter bounds. A new bundle is built for every
//! test so no test can observe another's mutations.

use serde::Serialize;

/// Body of a `POST /messages` request
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    pub name: String,
    pub subject: String,
    pub message: String,
    pub email: String,
}

impl MessagePayload {
    pub fn new(
        name: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            message: message.into(),
            email: email.into(),
        }
    }
}

/// Inclusive price bounds for the `between` filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl PriceRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min as f64 <= price && price <= self.max as f64
    }

    /// Query value in the form `price,<min>,<max>`
    pub fn between_value(&self) -> String {
        format!("price,{},{}", self.min, self.max)
    }
}

/// Named scenarios handed to each test
#[derive(Clone, Debug, PartialEq)]
pub struct TestData {
    pub valid_message: MessagePayload,
    pub invalid_message: MessagePayload,
    pub price_ranges: Vec<PriceRange>,
}

impl TestData {
    /// Build a fresh bundle
    pub fn fixture() -> Self {
        Self {
            valid_message: MessagePayload::new(
                "Test User",
                "API Test",
                "This is a test message for API testing.",
                "test@example.com",
            ),
            invalid_message: MessagePayload::new("", "", "", "invalid-email"),
            price_ranges: vec![
                PriceRange::new(1, 78),
                PriceRange::new(1, 100),
                PriceRange::new(10, 50),
            ],
        }
    }
}
