//! Output formatters for test results
//!
//! Provides table, JSON, CSV, and one-line summary output.

use crate::models::{TestResult, TestRunSummary, TestStatus};

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Csv,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "csv" => Some(OutputFormat::Csv),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }

    /// Table output is followed by a separate summary block; the others are one document
    pub fn streams_results(&self) -> bool {
        matches!(self, OutputFormat::Table)
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format a single test result
    pub fn format_result(&self, result: &TestResult) -> String {
        match self.format {
            OutputFormat::Table => self.format_result_table(result),
            OutputFormat::Json => serde_json::to_string(result).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(result).unwrap_or_default(),
            OutputFormat::Csv => self.format_result_csv(result),
            OutputFormat::Summary => self.format_result_summary(result),
        }
    }

    fn status_label(&self, status: TestStatus) -> &'static str {
        if self.colorize {
            match status {
                TestStatus::Pass => "\x1b[32m✓ PASS \x1b[0m",
                TestStatus::Fail => "\x1b[31m✗ FAIL \x1b[0m",
                TestStatus::Skip => "\x1b[33m○ SKIP \x1b[0m",
                TestStatus::Error => "\x1b[31m! ERROR\x1b[0m",
            }
        } else {
            match status {
                TestStatus::Pass => "✓ PASS ",
                TestStatus::Fail => "✗ FAIL ",
                TestStatus::Skip => "○ SKIP ",
                TestStatus::Error => "! ERROR",
            }
        }
    }

    fn format_result_table(&self, result: &TestResult) -> String {
        let tc = result.test_case;
        let mut line = format!(
            "{:2}. [{}] {:<12} {:<22} {} [{:>6}ms]",
            tc.number(),
            tc.priority(),
            tc.category().name(),
            tc.name(),
            self.status_label(result.status),
            result.duration_ms
        );
        if result.status != TestStatus::Pass {
            if let Some(message) = &result.message {
                line.push_str(&format!("\n      {message}"));
            }
        }
        line
    }

    fn format_result_csv(&self, result: &TestResult) -> String {
        let tc = result.test_case;
        format!(
            "{},{},{},{},{},{},\"{}\"",
            tc.number(),
            tc.name(),
            tc.category().name(),
            tc.priority(),
            result.status,
            result.duration_ms,
            result.message.as_deref().unwrap_or("").replace('"', "\"\"")
        )
    }

    fn format_result_summary(&self, result: &TestResult) -> String {
        format!(
            "{} {} ({}ms)",
            result.status.symbol(),
            result.test_case.name(),
            result.duration_ms
        )
    }

    /// Format a run summary
    pub fn format_summary(&self, summary: &TestRunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Csv => self.format_summary_csv(summary),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &TestRunSummary) -> String {
        let mut output = String::new();

        output.push_str("\n══════════════════════════════════════════════════════════════\n");
        output.push_str(&format!(" Storefront API Results - {}\n", summary.base_url));
        output.push_str("══════════════════════════════════════════════════════════════\n");

        let pass_str = if self.colorize {
            format!("\x1b[32m{}\x1b[0m", summary.passed)
        } else {
            summary.passed.to_string()
        };
        let fail_str = if self.colorize && summary.failed > 0 {
            format!("\x1b[31m{}\x1b[0m", summary.failed)
        } else {
            summary.failed.to_string()
        };

        output.push_str(&format!(
            " Total: {} | Pass: {} | Fail: {} | Skip: {} | Error: {}\n",
            summary.total, pass_str, fail_str, summary.skipped, summary.errors
        ));
        output.push_str(&format!(
            " Pass Rate: {:.1}% | Duration: {}ms\n",
            summary.pass_rate(),
            summary.total_duration_ms
        ));

        output.push_str(" ──────────────────────────────────────────────────────────────\n");
        for (priority, tally) in summary.by_priority() {
            output.push_str(&format!(
                " {:<10} {:>2}/{:<2} passed, {} failed\n",
                priority.label(),
                tally.passed,
                tally.total,
                tally.failed
            ));
        }

        let failures: Vec<_> = summary.failures().collect();
        if !failures.is_empty() {
            output.push_str(" ──────────────────────────────────────────────────────────────\n");
            output.push_str(" Failures:\n");
            for result in failures {
                output.push_str(&format!(
                    "   - {} ({}): {}\n",
                    result.test_case,
                    result.status,
                    result.message.as_deref().unwrap_or("no message")
                ));
            }
        }

        output.push_str("══════════════════════════════════════════════════════════════\n");
        output
    }

    fn format_summary_csv(&self, summary: &TestRunSummary) -> String {
        let mut output = String::new();
        output.push_str("test_num,test_name,category,priority,status,duration_ms,message\n");
        for result in &summary.results {
            output.push_str(&self.format_result_csv(result));
            output.push('\n');
        }
        output
    }

    fn format_summary_brief(&self, summary: &TestRunSummary) -> String {
        format!(
            "{}: {}/{} passed ({:.1}%), {} failed, {} errors in {}ms",
            summary.base_url,
            summary.passed,
            summary.total,
            summary.pass_rate(),
            summary.failed,
            summary.errors,
            summary.total_duration_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestCase;

    fn sample_summary() -> TestRunSummary {
        TestRunSummary::new(
            "http://localhost:8091",
            vec![
                TestResult::pass(TestCase::ProductListing, 120),
                TestResult::fail(
                    TestCase::InvalidMessage,
                    80,
                    "expected status one of [400, 422], got 200",
                ),
                TestResult::skip(TestCase::SingleProduct, "no products"),
            ],
        )
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE"), Some(OutputFormat::Table));
        assert_eq!(
            OutputFormat::from_str("json-pretty"),
            Some(OutputFormat::JsonPretty)
        );
        assert_eq!(OutputFormat::from_str("unknown"), None);
    }

    #[test]
    fn test_formatter_creation() {
        let formatter = ResultFormatter::new(OutputFormat::Json).no_color();
        assert_eq!(formatter.format, OutputFormat::Json);
        assert!(!formatter.colorize);
    }

    #[test]
    fn test_format_result_table() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_result(&TestResult::pass(TestCase::PriceRangeFilter, 95));
        assert!(output.contains("[P1]"));
        assert!(output.contains("Products"));
        assert!(output.contains("Price Range Filter"));
        assert!(output.contains("PASS"));
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_failure_message_shown_in_table() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let result = TestResult::fail(TestCase::InvalidProductId, 50, "expected status one of [404, 400], got 500");
        assert!(formatter.format_result(&result).contains("got 500"));
    }

    #[test]
    fn test_csv_escapes_quotes() {
        let formatter = ResultFormatter::new(OutputFormat::Csv);
        let result = TestResult::fail(TestCase::ValidMessage, 10, "body \"oops\"");
        let line = formatter.format_result(&result);
        assert!(line.starts_with("9,Valid Message,Messages,P1,FAIL,10,"));
        assert!(line.ends_with("\"body \"\"oops\"\"\""));
    }

    #[test]
    fn test_summary_table_lists_priorities_and_failures() {
        let formatter = ResultFormatter::new(OutputFormat::Table).no_color();
        let output = formatter.format_summary(&sample_summary());
        assert!(output.contains("Total: 3 | Pass: 1 | Fail: 1 | Skip: 1 | Error: 0"));
        assert!(output.contains("P1"));
        assert!(output.contains("P2"));
        assert!(output.contains("Failures:"));
        assert!(output.contains("got 200"));
    }

    #[test]
    fn test_summary_json_is_parseable() {
        let formatter = ResultFormatter::new(OutputFormat::Json);
        let output = formatter.format_summary(&sample_summary());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["results"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_summary_brief() {
        let formatter = ResultFormatter::new(OutputFormat::Summary);
        let output = formatter.format_summary(&sample_summary());
        assert!(output.starts_with("http://localhost:8091: 1/3 passed"));
    }
}
