//! Test result models
//!
//! Defines per-test outcomes and the summary of a full run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::test_case::{Priority, TestCase};

/// Test execution status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
    Error,
}

impl TestStatus {
    pub fn symbol(&self) -> &'static str {
        match self {
            TestStatus::Pass => "✓",
            TestStatus::Fail => "✗",
            TestStatus::Skip => "○",
            TestStatus::Error => "!",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }

    /// FAIL and ERROR both break the run
    pub fn is_failure(&self) -> bool {
        matches!(self, TestStatus::Fail | TestStatus::Error)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "PASS"),
            TestStatus::Fail => write!(f, "FAIL"),
            TestStatus::Skip => write!(f, "SKIP"),
            TestStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of a single test execution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub test_case: TestCase,
    pub status: TestStatus,
    pub duration_ms: u64,
    pub message: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl TestResult {
    pub fn pass(test_case: TestCase, duration_ms: u64) -> Self {
        Self {
            test_case,
            status: TestStatus::Pass,
            duration_ms,
            message: None,
            details: None,
        }
    }

    pub fn fail(test_case: TestCase, duration_ms: u64, message: impl Into<String>) -> Self {
        Self {
            test_case,
            status: TestStatus::Fail,
            duration_ms,
            message: Some(message.into()),
            details: None,
        }
    }

    pub fn skip(test_case: TestCase, reason: impl Into<String>) -> Self {
        Self {
            test_case,
            status: TestStatus::Skip,
            duration_ms: 0,
            message: Some(reason.into()),
            details: None,
        }
    }

    pub fn error(test_case: TestCase, duration_ms: u64, error: impl Into<String>) -> Self {
        Self {
            test_case,
            status: TestStatus::Error,
            duration_ms,
            message: Some(error.into()),
            details: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}ms]",
            self.status.symbol(),
            self.test_case,
            self.duration_ms
        )?;
        if let Some(msg) = &self.message {
            write!(f, " - {msg}")?;
        }
        Ok(())
    }
}

/// Pass/fail counts for one priority label
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTally {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Summary of one suite run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TestRunSummary {
    pub base_url: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total_duration_ms: u64,
    pub results: Vec<TestResult>,
}

impl TestRunSummary {
    pub fn new(base_url: impl Into<String>, results: Vec<TestResult>) -> Self {
        let count = |status: TestStatus| results.iter().filter(|r| r.status == status).count();

        Self {
            base_url: base_url.into(),
            total: results.len(),
            passed: count(TestStatus::Pass),
            failed: count(TestStatus::Fail),
            skipped: count(TestStatus::Skip),
            errors: count(TestStatus::Error),
            total_duration_ms: results.iter().map(|r| r.duration_ms).sum(),
            results,
        }
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed + self.errors > 0
    }

    /// Tallies keyed by priority, P1 first
    pub fn by_priority(&self) -> BTreeMap<Priority, PriorityTally> {
        let mut tallies: BTreeMap<Priority, PriorityTally> = BTreeMap::new();
        for result in &self.results {
            let tally = tallies.entry(result.test_case.priority()).or_default();
            tally.total += 1;
            if result.status.is_success() {
                tally.passed += 1;
            } else if result.status.is_failure() {
                tally.failed += 1;
            }
        }
        tallies
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.status.is_failure())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> TestRunSummary {
        TestRunSummary::new(
            "https://api.example.test",
            vec![
                TestResult::pass(TestCase::ProductListing, 100),
                TestResult::fail(TestCase::InvalidProductId, 50, "expected status one of [404, 400], got 500"),
                TestResult::skip(TestCase::SingleProduct, "no products available"),
                TestResult::error(TestCase::ConcurrentRequests, 10, "connection refused"),
            ],
        )
    }

    #[test]
    fn test_result_creation() {
        let result = TestResult::pass(TestCase::ProductListing, 100);
        assert!(result.status.is_success());
        assert_eq!(result.duration_ms, 100);
        assert!(result.message.is_none());
    }

    #[test]
    fn test_run_summary_counts() {
        let summary = sample_summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.total_duration_ms, 160);
        assert!(summary.has_failures());
        assert_eq!(summary.failures().count(), 2);
    }

    #[test]
    fn test_skips_do_not_fail_the_run() {
        let summary = TestRunSummary::new(
            "https://api.example.test",
            vec![
                TestResult::pass(TestCase::ProductListing, 10),
                TestResult::skip(TestCase::SingleProduct, "no products available"),
            ],
        );
        assert!(!summary.has_failures());
        assert_eq!(summary.pass_rate(), 50.0);
    }

    #[test]
    fn test_by_priority() {
        let tallies = sample_summary().by_priority();
        let p1 = tallies[&Priority::P1];
        assert_eq!(p1.total, 2);
        assert_eq!(p1.passed, 1);
        assert_eq!(p1.failed, 0);
        assert_eq!(tallies[&Priority::P2].failed, 1);
        assert_eq!(tallies[&Priority::P3].failed, 1);
        assert_eq!(tallies.keys().next(), Some(&Priority::P1));
    }

    #[test]
    fn test_empty_summary_pass_rate() {
        let summary = TestRunSummary::new("https://api.example.test", Vec::new());
        assert_eq!(summary.pass_rate(), 0.0);
        assert!(!summary.has_failures());
    }
}
