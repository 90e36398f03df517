//! Run reporting
//!
//! Produces the optional HTML artifact for a finished run.

mod report;

pub use report::HtmlReport;
