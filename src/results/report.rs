//! HTML report for a suite run
//!
//! Renders one self-contained page (inline CSS, no external assets) with run
//! metadata, summary cards, per-priority tallies, and a row per test.

use std::fmt::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{TestRunSummary, TestStatus};

/// Environment information
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    /// Operating system
    pub os: String,

    /// Architecture
    pub arch: String,

    /// Tool version
    pub tool_version: String,
}

impl Default for EnvironmentInfo {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Report for a single run
pub struct HtmlReport<'a> {
    summary: &'a TestRunSummary,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    environment: EnvironmentInfo,
}

impl<'a> HtmlReport<'a> {
    pub fn new(
        summary: &'a TestRunSummary,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            summary,
            started_at,
            completed_at,
            environment: EnvironmentInfo::default(),
        }
    }

    /// Render the full document
    pub fn render(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut output);
        output
    }

    /// Write the report to `path`, creating parent directories as needed
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
        }
        std::fs::write(path, self.render())
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        Ok(())
    }

    fn write_html(&self, output: &mut String) -> fmt::Result {
        let summary = self.summary;

        writeln!(
            output,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Storefront API Test Report - {}</title>
    <style>
        body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 40px; background: #f5f5f5; }}
        .container {{ max-width: 1200px; margin: 0 auto; background: white; padding: 40px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
        h1 {{ color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px; }}
        h2 {{ color: #555; margin-top: 30px; }}
        table {{ width: 100%; border-collapse: collapse; margin: 20px 0; }}
        th, td {{ padding: 12px; text-align: left; border-bottom: 1px solid #ddd; vertical-align: top; }}
        th {{ background: #007bff; color: white; }}
        tr:hover {{ background: #f8f9fa; }}
        .pass {{ color: #28a745; font-weight: bold; }}
        .fail {{ color: #dc3545; font-weight: bold; }}
        .error {{ color: #a71d2a; font-weight: bold; }}
        .skip {{ color: #b8860b; font-weight: bold; }}
        .message {{ font-family: monospace; font-size: 13px; white-space: pre-wrap; }}
        .stat-card {{ display: inline-block; background: #f8f9fa; padding: 20px; margin: 10px; border-radius: 8px; min-width: 150px; text-align: center; }}
        .stat-value {{ font-size: 24px; font-weight: bold; color: #007bff; }}
        .stat-label {{ color: #666; font-size: 14px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Storefront API Test Report</h1>

        <h2>Summary</h2>"#,
            escape_html(&summary.base_url)
        )?;

        for (value, label) in [
            (summary.total.to_string(), "Tests"),
            (summary.passed.to_string(), "Passed"),
            (summary.failed.to_string(), "Failed"),
            (summary.errors.to_string(), "Errors"),
            (summary.skipped.to_string(), "Skipped"),
            (format!("{:.1}%", summary.pass_rate()), "Pass Rate"),
            (format!("{}ms", summary.total_duration_ms), "Duration"),
        ] {
            writeln!(
                output,
                r#"        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>"#
            )?;
        }

        writeln!(
            output,
            r#"
        <h2>By Priority</h2>
        <table>
            <tr><th>Priority</th><th>Meaning</th><th>Total</th><th>Passed</th><th>Failed</th></tr>"#
        )?;
        for (priority, tally) in summary.by_priority() {
            writeln!(
                output,
                "            <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                priority.label(),
                priority.description(),
                tally.total,
                tally.passed,
                tally.failed
            )?;
        }
        writeln!(output, "        </table>")?;

        writeln!(
            output,
            r#"
        <h2>Test Results</h2>
        <table>
            <tr>
                <th>#</th>
                <th>Test</th>
                <th>Category</th>
                <th>Priority</th>
                <th>Status</th>
                <th>Duration</th>
                <th>Message</th>
            </tr>"#
        )?;
        for result in &summary.results {
            let tc = result.test_case;
            writeln!(
                output,
                r#"            <tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td class="{}">{}</td>
                <td>{}ms</td>
                <td class="message">{}</td>
            </tr>"#,
                tc.number(),
                tc.name(),
                tc.category(),
                tc.priority(),
                status_class(result.status),
                result.status,
                result.duration_ms,
                escape_html(result.message.as_deref().unwrap_or(""))
            )?;
        }
        writeln!(output, "        </table>")?;

        writeln!(
            output,
            r#"
        <h2>Environment</h2>
        <table>
            <tr><th>Property</th><th>Value</th></tr>
            <tr><td>Base URL</td><td><code>{}</code></td></tr>
            <tr><td>Started</td><td>{}</td></tr>
            <tr><td>Completed</td><td>{}</td></tr>
            <tr><td>OS</td><td>{}</td></tr>
            <tr><td>Architecture</td><td>{}</td></tr>
            <tr><td>Tool Version</td><td>{}</td></tr>
        </table>
    </div>
</body>
</html>"#,
            escape_html(&summary.base_url),
            format_datetime(&self.started_at),
            format_datetime(&self.completed_at),
            self.environment.os,
            self.environment.arch,
            self.environment.tool_version
        )
    }
}

fn status_class(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Pass => "pass",
        TestStatus::Fail => "fail",
        TestStatus::Skip => "skip",
        TestStatus::Error => "error",
    }
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
