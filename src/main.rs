//! shop-api-check - Storefront API test suite
//!
//! A CLI tool that runs black-box HTTP checks against the Practice Software
//! Testing storefront API and reports each one as PASS, FAIL, SKIP, or ERROR.
//!
//! ## Features
//!
//! - 14 test cases covering products, contact messages, and performance
//! - P1/P2/P3 priority labels for filtering and triage
//! - Multiple output formats (Table, JSON, CSV)
//! - Optional self-contained HTML report
//!
//! ## Usage
//!
//! ```bash
//! # Run everything against the public instance
//! shop-api-check run
//!
//! # Run only high-priority checks against a local instance
//! shop-api-check run --priority p1 --base-url http://localhost:8091
//!
//! # Write an HTML report
//! shop-api-check run --report reports/report.html
//!
//! # List available tests
//! shop-api-check list --detailed
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

mod cli;
mod config;
mod executor;
mod http;
mod models;
mod output;
mod results;
mod tests;
mod utils;

use cli::Args;
use config::{AppConfig, ConfigFile, EnvConfig};
use executor::{TestFilter, TestRunner};
use models::{Priority, TestCase};
use output::{OutputFormat, ResultFormatter};
use results::HtmlReport;
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();

    init_logger(LogLevel::for_verbosity(
        args.verbose || env.verbose.unwrap_or(false),
    ));

    match args.command {
        cli::Command::Run(run_args) => {
            let all_passed = run_suite(run_args, &env).await?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        cli::Command::List(list_args) => {
            list_tests(list_args)?;
        }
        cli::Command::Config(config_args) => {
            manage_config(config_args, &env)?;
        }
    }

    Ok(())
}

/// Defaults, then config file, then environment, then flags
fn resolve_config(args: &cli::RunArgs, env: &EnvConfig) -> Result<AppConfig> {
    let config_path = args.config.as_deref().or(env.config_file.as_deref());
    let mut config = ConfigFile::load_or_default(config_path)?.app;
    config.apply_env(env);

    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = Some(timeout);
    }
    if let Some(format) = &args.format {
        config.format = format.clone();
    }
    if let Some(report) = &args.report {
        config.report_path = Some(report.clone());
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn build_filter(args: &cli::RunArgs) -> Result<TestFilter> {
    let mut filter = TestFilter::new();
    if let Some(priorities) = &args.priority {
        filter = filter.with_priorities(priorities)?;
    }
    if let Some(categories) = &args.category {
        filter = filter.with_categories(categories)?;
    }
    if let Some(number) = args.test {
        let test_case = TestCase::from_number(number)
            .ok_or_else(|| anyhow::anyhow!("Invalid test number: {number}"))?;
        filter = filter.number(test_case.number());
    }
    if let Some(skip) = &args.skip {
        filter = filter.with_skip_list(skip)?;
    }
    Ok(filter)
}

/// Returns whether every executed test passed or was skipped
async fn run_suite(args: cli::RunArgs, env: &EnvConfig) -> Result<bool> {
    let config = resolve_config(&args, env)?;
    let filter = build_filter(&args)?;

    let format = OutputFormat::from_str(&config.format)
        .ok_or_else(|| anyhow::anyhow!("Unknown output format: {}", config.format))?;
    let mut formatter = ResultFormatter::new(format);
    if args.no_color {
        formatter = formatter.no_color();
    }

    let runner = TestRunner::new(&config)?.with_filter(filter);
    if runner.selected().is_empty() {
        warn!("No tests match the given filters");
        return Ok(true);
    }

    info!("Testing storefront API at {}", config.base_url);

    let started_at = Utc::now();
    let summary = runner.run_all().await;
    let completed_at = Utc::now();

    if format.streams_results() {
        for result in &summary.results {
            println!("{}", formatter.format_result(result));
        }
    }
    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = &config.report_path {
        HtmlReport::new(&summary, started_at, completed_at).write_to(path)?;
        info!("HTML report written to {}", path);
    }

    Ok(!summary.has_failures())
}

fn list_tests(args: cli::ListArgs) -> Result<()> {
    let mut filter = TestFilter::new();
    if let Some(priorities) = &args.priority {
        filter = filter.with_priorities(priorities)?;
    }
    let selected = filter.select();

    println!(
        "\nStorefront API Test Cases ({} of {} shown)\n",
        selected.len(),
        TestCase::all().len()
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut current_category = None;

    for test_case in selected {
        let category = test_case.category();
        if current_category != Some(category) {
            println!("\n{category} Tests:");
            println!("──────────────────────────────────────────────────────────────────────");
            current_category = Some(category);
        }

        if args.detailed {
            println!(
                "  {:2}. {:22} [{}] {}",
                test_case.number(),
                test_case.name(),
                test_case.priority(),
                test_case.priority().description()
            );
        } else {
            println!(
                "  {:2}. [{}] {}",
                test_case.number(),
                test_case.priority(),
                test_case.name()
            );
        }
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    if args.detailed {
        println!("Priority markers:\n");
        for priority in Priority::all() {
            println!("  {:4} {}", priority.marker(), priority.description());
        }
        println!();
    }

    Ok(())
}

fn manage_config(args: cli::ConfigArgs, env: &EnvConfig) -> Result<()> {
    match args.action {
        cli::ConfigAction::Init { output, force } => {
            let path = Path::new(&output);
            if path.exists() && !force {
                anyhow::bail!(
                    "Configuration file already exists: {output}. Use --force to overwrite."
                );
            }

            ConfigFile::example().save(path)?;
            println!("✓ Configuration file created: {output}");
            println!("\nEdit the file to customize your settings.");
        }

        cli::ConfigAction::Show { format } => {
            let mut config = ConfigFile::load_or_default(env.config_file.as_deref())?;
            config.app.apply_env(env);
            let output = if format == "json" {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_yaml::to_string(&config)?
            };
            println!("{output}");
        }

        cli::ConfigAction::Validate { file } => {
            let path = match file {
                Some(file) => file,
                None => ConfigFile::find()
                    .map(|p| p.to_string_lossy().to_string())
                    .ok_or_else(|| anyhow::anyhow!("No configuration file found"))?,
            };

            match ConfigFile::load(&path) {
                Ok(_) => {
                    println!("✓ Configuration file is valid: {path}");
                }
                Err(e) => {
                    println!("✗ Configuration file is invalid: {path}");
                    println!("  Error: {e:#}");
                    return Err(e);
                }
            }
        }

        cli::ConfigAction::Env => {
            config::env::print_env_help();
            if env.has_any() {
                println!();
                env.print_summary();
            }
        }
    }

    Ok(())
}
