//! Output formatting module
//!
//! Console rendering of results and run summaries.

mod formatter;

pub use formatter::{OutputFormat, ResultFormatter};
