//! HTTP client module
//!
//! One shared client per run, bound to the storefront base URL.

mod client;

pub use client::{ApiClient, ApiResponse, HttpError};
