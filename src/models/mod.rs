//! Data models for the storefront API suite
//!
//! Test case registry, run results, and fixture payloads.

mod fixtures;
mod test_case;
mod test_result;

pub use fixtures::{PriceRange, TestData};
pub use test_case::{Category, Priority, TestCase};
pub use test_result::{TestResult, TestRunSummary, TestStatus};
