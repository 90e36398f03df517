//! Test case registry
//!
//! Every check the suite knows about, with its category and priority label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource group a test case targets
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Products,
    Messages,
    Performance,
}

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Products => "Products",
            Category::Messages => "Messages",
            Category::Performance => "Performance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "products" | "product" => Some(Category::Products),
            "messages" | "message" => Some(Category::Messages),
            "performance" | "perf" => Some(Category::Performance),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Triage label attached to each test case.
///
/// Used for filtering and reporting only; execution order is the registry order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }

    /// Marker name accepted on the command line
    pub fn marker(&self) -> &'static str {
        match self {
            Priority::P1 => "p1",
            Priority::P2 => "p2",
            Priority::P3 => "p3",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Priority::P1 => "high priority",
            Priority::P2 => "medium priority",
            Priority::P3 => "low priority",
        }
    }

    pub fn all() -> Vec<Priority> {
        vec![Priority::P1, Priority::P2, Priority::P3]
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "p1" | "1" => Some(Priority::P1),
            "p2" | "2" => Some(Priority::P2),
            "p3" | "3" => Some(Priority::P3),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// All 14 test cases, in execution order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCase {
    // Products (1-8)
    ProductListing,
    PriceRangeFilter,
    SortAndPagination,
    SingleProduct,
    InvalidProductId,
    InvalidPriceRange,
    InvalidSortToken,
    RepeatedListing,

    // Messages (9-12)
    ValidMessage,
    InvalidMessage,
    MissingFields,
    EmptyPayload,

    // Performance (13-14)
    ResponseTime,
    ConcurrentRequests,
}

impl TestCase {
    /// Get test case number (1-14)
    pub fn number(&self) -> u8 {
        match self {
            TestCase::ProductListing => 1,
            TestCase::PriceRangeFilter => 2,
            TestCase::SortAndPagination => 3,
            TestCase::SingleProduct => 4,
            TestCase::InvalidProductId => 5,
            TestCase::InvalidPriceRange => 6,
            TestCase::InvalidSortToken => 7,
            TestCase::RepeatedListing => 8,
            TestCase::ValidMessage => 9,
            TestCase::InvalidMessage => 10,
            TestCase::MissingFields => 11,
            TestCase::EmptyPayload => 12,
            TestCase::ResponseTime => 13,
            TestCase::ConcurrentRequests => 14,
        }
    }

    /// Get test case name
    pub fn name(&self) -> &'static str {
        match self {
            TestCase::ProductListing => "Product Listing",
            TestCase::PriceRangeFilter => "Price Range Filter",
            TestCase::SortAndPagination => "Sort And Pagination",
            TestCase::SingleProduct => "Single Product",
            TestCase::InvalidProductId => "Invalid Product Id",
            TestCase::InvalidPriceRange => "Invalid Price Range",
            TestCase::InvalidSortToken => "Invalid Sort Token",
            TestCase::RepeatedListing => "Repeated Listing",
            TestCase::ValidMessage => "Valid Message",
            TestCase::InvalidMessage => "Invalid Message",
            TestCase::MissingFields => "Missing Fields",
            TestCase::EmptyPayload => "Empty Payload",
            TestCase::ResponseTime => "Response Time",
            TestCase::ConcurrentRequests => "Concurrent Requests",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            TestCase::ProductListing
            | TestCase::PriceRangeFilter
            | TestCase::SortAndPagination
            | TestCase::SingleProduct
            | TestCase::InvalidProductId
            | TestCase::InvalidPriceRange
            | TestCase::InvalidSortToken
            | TestCase::RepeatedListing => Category::Products,
            TestCase::ValidMessage
            | TestCase::InvalidMessage
            | TestCase::MissingFields
            | TestCase::EmptyPayload => Category::Messages,
            TestCase::ResponseTime | TestCase::ConcurrentRequests => Category::Performance,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            TestCase::ProductListing
            | TestCase::PriceRangeFilter
            | TestCase::SortAndPagination
            | TestCase::SingleProduct
            | TestCase::ValidMessage => Priority::P1,
            TestCase::InvalidProductId
            | TestCase::InvalidPriceRange
            | TestCase::InvalidMessage
            | TestCase::MissingFields
            | TestCase::ResponseTime => Priority::P2,
            TestCase::InvalidSortToken
            | TestCase::RepeatedListing
            | TestCase::EmptyPayload
            | TestCase::ConcurrentRequests => Priority::P3,
        }
    }

    /// Get all test cases
    pub fn all() -> Vec<TestCase> {
        vec![
            TestCase::ProductListing,
            TestCase::PriceRangeFilter,
            TestCase::SortAndPagination,
            TestCase::SingleProduct,
            TestCase::InvalidProductId,
            TestCase::InvalidPriceRange,
            TestCase::InvalidSortToken,
            TestCase::RepeatedListing,
            TestCase::ValidMessage,
            TestCase::InvalidMessage,
            TestCase::MissingFields,
            TestCase::EmptyPayload,
            TestCase::ResponseTime,
            TestCase::ConcurrentRequests,
        ]
    }

    /// Parse from test number
    pub fn from_number(n: u8) -> Option<TestCase> {
        Self::all().into_iter().find(|tc| tc.number() == n)
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test {} [{}]: {}",
            self.number(),
            self.priority(),
            self.name()
        )
    }
}
