//! Test execution
//!
//! Selects test cases and runs them one after another against a shared client.

mod filter;
mod runner;

pub use filter::TestFilter;
pub use runner::TestRunner;
