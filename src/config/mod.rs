//! Configuration module
//!
//! Settings are layered: built-in defaults, then a config file, then
//! `SHOP_API_*` environment variables, then command-line flags.

pub mod env;
mod file;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use env::EnvConfig;
pub use file::ConfigFile;

pub const DEFAULT_BASE_URL: &str = "https://api.practicesoftwaretesting.com";
pub const DEFAULT_USER_AGENT: &str = "Cathay-API-Test/1.0";

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storefront API root
    pub base_url: String,

    /// User-Agent sent on every request
    pub user_agent: String,

    /// Request timeout in seconds; unset keeps the transport default
    pub timeout_secs: Option<u64>,

    /// Console output format
    pub format: String,

    /// HTML report path; unset disables the report
    pub report_path: Option<String>,

    /// Performance thresholds
    pub performance: PerformanceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: None,
            format: "table".to_string(),
            report_path: None,
            performance: PerformanceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Overlay values set in the environment
    pub fn apply_env(&mut self, env: &EnvConfig) {
        if let Some(url) = &env.base_url {
            self.base_url = url.clone();
        }
        if let Some(agent) = &env.user_agent {
            self.user_agent = agent.clone();
        }
        if let Some(timeout) = env.timeout {
            self.timeout_secs = Some(timeout);
        }
        if let Some(format) = &env.format {
            self.format = format.clone();
        }
        if let Some(report) = &env.report {
            self.report_path = Some(report.clone());
        }
    }

    /// Reject settings no run could succeed with
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            anyhow::bail!("base_url must start with http:// or https://: {}", self.base_url);
        }
        if self.user_agent.trim().is_empty() {
            anyhow::bail!("user_agent must not be empty");
        }
        if self.timeout_secs == Some(0) {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        self.performance.validate()
    }
}

/// Thresholds for the performance tests
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Single-call latency budget in milliseconds
    pub max_response_ms: u64,

    /// Simultaneous requests in the concurrency test
    pub concurrent_requests: usize,

    /// How many of those must return 200
    pub min_successes: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_response_ms: 5000,
            concurrent_requests: 5,
            min_successes: 4,
        }
    }
}

impl PerformanceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_response_ms == 0 {
            anyhow::bail!("performance.max_response_ms must be greater than zero");
        }
        if self.concurrent_requests == 0 {
            anyhow::bail!("performance.concurrent_requests must be greater than zero");
        }
        if self.min_successes > self.concurrent_requests {
            anyhow::bail!(
                "performance.min_successes ({}) cannot exceed concurrent_requests ({})",
                self.min_successes,
                self.concurrent_requests
            );
        }
        Ok(())
    }
}
