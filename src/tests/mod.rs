//! Storefront API test implementations
//!
//! ## Test Categories
//!
//! ### Products (1-8)
//! - Product Listing, Price Range Filter, Sort And Pagination, Single Product
//! - Invalid Product Id, Invalid Price Range, Invalid Sort Token
//! - Repeated Listing
//!
//! ### Messages (9-12)
//! - Valid Message, Invalid Message, Missing Fields, Empty Payload
//!
//! ### Performance (13-14)
//! - Response Time
//! - Concurrent Requests

mod messages;

use std::sync::Arc;

use crate::config::PerformanceConfig;
use crate::http::ApiClient;
use crate::models::{TestCase, TestData};

pub use assert::{CheckError, CheckResult};

/// Shared state handed to every test: the run's client and thresholds
#[derive(Clone, Debug)]
pub struct TestContext {
    pub client: Arc<ApiClient>,
    pub performance: PerformanceConfig,
}

impl TestContext {
    pub fn new(client: Arc<ApiClient>, performance: PerformanceConfig) -> Self {
        Self {
            client,
            performance,
        }
    }
}

/// What a check concluded when it did not fail
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Pass {
        note: Option<String>,
        details: Option<serde_json::Value>,
    },
    Skip(String),
}

impl Verdict {
    pub fn pass_with(note: impl Into<String>) -> Self {
        Verdict::Pass {
            note: Some(note.into()),
            details: None,
        }
    }

    pub fn with_details(self, details: serde_json::Value) -> Self {
        match self {
            Verdict::Pass { note, .. } => Verdict::Pass {
                note,
                details: Some(details),
            },
            skip => skip,
        }
    }
}

/// Run a specific test case with its own fixture bundle
pub async fn run_test(test_case: TestCase, ctx: &TestContext, data: TestData) -> CheckResult<Verdict> {
    match test_case {
        TestCase::ProductListing => products::listing(ctx).await,
        TestCase::PriceRangeFilter => products::price_range(ctx, &data).await,
        TestCase::SortAndPagination => products::sort_and_page(ctx, &data).await,
        TestCase::SingleProduct => products::single_product(ctx).await,
        TestCase::InvalidProductId => products::invalid_id(ctx).await,
        TestCase::InvalidPriceRange => products::invalid_price_range(ctx, &data).await,
        TestCase::InvalidSortToken => products::invalid_sort(ctx).await,
        TestCase::RepeatedListing => products::repeated_listing(ctx).await,
        TestCase::ValidMessage => messages::valid(ctx, &data).await,
        TestCase::InvalidMessage => messages::invalid(ctx, &data).await,
        TestCase::MissingFields => messages::missing_fields(ctx, &data).await,
        TestCase::EmptyPayload => messages::empty_payload(ctx).await,
        TestCase::ResponseTime => performance::response_time(ctx).await,
        TestCase::ConcurrentRequests => performance::concurrent_requests(ctx).await,
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_verdict_details_only_attach_to_pass() {
        let pass = Verdict::pass_with("5/5").with_details(json!({"ok": 5}));
        assert_eq!(
            pass,
            Verdict::Pass {
                note: Some("5/5".to_string()),
                details: Some(json!({"ok": 5})),
            }
        );

        let skip = Verdict::Skip("nothing to fetch".to_string()).with_details(json!({}));
        assert_eq!(skip, Verdict::Skip("nothing to fetch".to_string()));
    }

    #[test]
    fn test_context_shares_one_client() {
        let client = Arc::new(
            ApiClient::new("https://api.example.test", "Suite-Test/1.0", None).unwrap(),
        );
        let ctx = TestContext::new(Arc::clone(&client), PerformanceConfig::default());
        let copy = ctx.clone();
        assert!(Arc::ptr_eq(&ctx.client, &copy.client));
        assert_eq!(Arc::strong_count(&client), 3);
    }
}
