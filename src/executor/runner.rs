//! Test execution runner
//!
//! Owns the run's shared client and executes the selected test cases in
//! registry order. One failing test never stops the ones after it.

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::filter::TestFilter;
use crate::config::AppConfig;
use crate::http::ApiClient;
use crate::models::{TestCase, TestData, TestResult, TestRunSummary};
use crate::tests::{self, CheckError, TestContext, Verdict};
use crate::utils::Timer;

/// Test runner for the storefront suite
pub struct TestRunner {
    context: TestContext,
    filter: TestFilter,
}

impl TestRunner {
    /// Build the run's client from `config`
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = ApiClient::new(&config.base_url, &config.user_agent, config.timeout_secs)?;
        Ok(Self {
            context: TestContext::new(Arc::new(client), config.performance.clone()),
            filter: TestFilter::default(),
        })
    }

    pub fn with_filter(mut self, filter: TestFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn base_url(&self) -> &str {
        self.context.client.base_url()
    }

    /// Test cases this runner will visit
    pub fn selected(&self) -> Vec<TestCase> {
        self.filter.select()
    }

    /// Run a single test case with a freshly built fixture bundle
    pub async fn run_test(&self, test_case: TestCase) -> TestResult {
        debug!("Starting {}", test_case);
        let timer = Timer::start(test_case.name());
        let outcome = tests::run_test(test_case, &self.context, TestData::fixture()).await;
        let duration_ms = timer.stop().as_millis() as u64;

        to_result(test_case, duration_ms, outcome)
    }

    /// Run every selected test case sequentially
    pub async fn run_all(&self) -> TestRunSummary {
        let selected = self.selected();
        info!(
            "Running {} test(s) against {}",
            selected.len(),
            self.base_url()
        );

        let timer = Timer::start("suite");
        let mut results = Vec::with_capacity(selected.len());

        for test_case in selected {
            let result = self.run_test(test_case).await;
            info!("  {}", result);
            results.push(result);
        }

        let summary = TestRunSummary::new(self.base_url(), results);

        info!(
            "Run completed in {}ms - Pass: {}/{} ({:.1}%)",
            timer.elapsed_ms(),
            summary.passed,
            summary.total,
            summary.pass_rate()
        );

        summary
    }
}

/// Map a check outcome onto the result taxonomy.
///
/// Assertion failures become FAIL, transport failures become ERROR.
fn to_result(
    test_case: TestCase,
    duration_ms: u64,
    outcome: Result<Verdict, CheckError>,
) -> TestResult {
    match outcome {
        Ok(Verdict::Pass { note, details }) => {
            let mut result = TestResult::pass(test_case, duration_ms);
            if let Some(note) = note {
                result = result.with_message(note);
            }
            if let Some(details) = details {
                result = result.with_details(details);
            }
            result
        }
        Ok(Verdict::Skip(reason)) => {
            warn!("{} skipped: {}", test_case, reason);
            TestResult::skip(test_case, reason)
        }
        Err(CheckError::Assertion(message)) => {
            error!("{} failed: {}", test_case, message);
            TestResult::fail(test_case, duration_ms, message)
        }
        Err(CheckError::Transport(e)) => {
            error!("{} errored: {}", test_case, e);
            TestResult::error(test_case, duration_ms, e.to_string())
        }
    }
}
