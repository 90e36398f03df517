//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "SHOP_API";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Base URL from SHOP_API_BASE_URL
    pub base_url: Option<String>,
    /// User agent from SHOP_API_USER_AGENT
    pub user_agent: Option<String>,
    /// Timeout from SHOP_API_TIMEOUT
    pub timeout: Option<u64>,
    /// Output format from SHOP_API_FORMAT
    pub format: Option<String>,
    /// HTML report path from SHOP_API_REPORT
    pub report: Option<String>,
    /// Verbose from SHOP_API_VERBOSE
    pub verbose: Option<bool>,
    /// Config file from SHOP_API_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            base_url: get_env("BASE_URL"),
            user_agent: get_env("USER_AGENT"),
            timeout: get_env_parse("TIMEOUT"),
            format: get_env("FORMAT"),
            report: get_env("REPORT"),
            verbose: get_env_bool("VERBOSE"),
            config_file: get_env("CONFIG"),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.base_url.is_some()
            || self.user_agent.is_some()
            || self.timeout.is_some()
            || self.format.is_some()
            || self.report.is_some()
            || self.verbose.is_some()
            || self.config_file.is_some()
    }

    /// Print current environment configuration
    pub fn print_summary(&self) {
        println!("Environment Configuration:");
        println!("  {}_BASE_URL:    {:?}", ENV_PREFIX, self.base_url);
        println!("  {}_USER_AGENT:  {:?}", ENV_PREFIX, self.user_agent);
        println!("  {}_TIMEOUT:     {:?}", ENV_PREFIX, self.timeout);
        println!("  {}_FORMAT:      {:?}", ENV_PREFIX, self.format);
        println!("  {}_REPORT:      {:?}", ENV_PREFIX, self.report);
        println!("  {}_VERBOSE:     {:?}", ENV_PREFIX, self.verbose);
        println!("  {}_CONFIG:      {:?}", ENV_PREFIX, self.config_file);
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}"))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.trim().parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}

/// Print all SHOP_API environment variables
pub fn print_env_help() {
    println!("Environment Variables:");
    println!();
    println!("  {ENV_PREFIX}_BASE_URL     Storefront API root URL");
    println!("  {ENV_PREFIX}_USER_AGENT   User-Agent header value");
    println!("  {ENV_PREFIX}_TIMEOUT      Request timeout in seconds");
    println!("  {ENV_PREFIX}_FORMAT       Output format (table, json, json-pretty, csv, summary)");
    println!("  {ENV_PREFIX}_REPORT       Path of the HTML report to write");
    println!("  {ENV_PREFIX}_VERBOSE      Enable verbose output (true/false)");
    println!("  {ENV_PREFIX}_CONFIG       Path to configuration file");
    println!();
    println!("Example:");
    println!("  export {ENV_PREFIX}_BASE_URL=http://localhost:8091");
    println!("  shop-api-check run --priority p1");
}
