//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Black-box API checks for the Practice Software Testing storefront
#[derive(Parser, Debug)]
#[command(name = "shop-api-check")]
#[command(version)]
#[command(about = "Run prioritized HTTP checks against the storefront API")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the test suite
    Run(RunArgs),

    /// List available tests
    List(ListArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Only run these priority markers (comma-separated: p1,p2,p3)
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Only run these categories (comma-separated: products,messages,performance)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Specific test number to run (1-14)
    #[arg(short, long)]
    pub test: Option<u8>,

    /// Skip specific tests (comma-separated test numbers)
    #[arg(long)]
    pub skip: Option<String>,

    /// Storefront API root URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Output format (table, json, json-pretty, csv, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write an HTML report to this path
    #[arg(short, long)]
    pub report: Option<String>,

    /// Configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show detailed test information
    #[arg(short, long)]
    pub detailed: bool,

    /// Only list these priority markers (comma-separated)
    #[arg(short, long)]
    pub priority: Option<String>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write an example configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "shop-api-check.yaml")]
        output: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output format (yaml, json)
        #[arg(short, long, default_value = "yaml")]
        format: String,
    },

    /// Validate a configuration file
    Validate {
        /// Configuration file (defaults to the first one found)
        file: Option<String>,
    },

    /// Show environment variables
    Env,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["shop-api-check", "list", "--detailed"]);
        match args.command {
            Command::List(list_args) => {
                assert!(list_args.detailed);
                assert!(list_args.priority.is_none());
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_run_args() {
        let args = Args::parse_from([
            "shop-api-check",
            "run",
            "--priority",
            "p1,p2",
            "--skip",
            "5,6",
            "--base-url",
            "http://localhost:8091",
            "--report",
            "reports/report.html",
            "--no-color",
        ]);
        match args.command {
            Command::Run(run_args) => {
                assert_eq!(run_args.priority.as_deref(), Some("p1,p2"));
                assert_eq!(run_args.skip.as_deref(), Some("5,6"));
                assert_eq!(run_args.base_url.as_deref(), Some("http://localhost:8091"));
                assert_eq!(run_args.report.as_deref(), Some("reports/report.html"));
                assert!(run_args.no_color);
                assert!(run_args.format.is_none());
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_global_verbose() {
        let args = Args::parse_from(["shop-api-check", "run", "-v", "--test", "3"]);
        assert!(args.verbose);
        match args.command {
            Command::Run(run_args) => assert_eq!(run_args.test, Some(3)),
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_config_init() {
        let args = Args::parse_from(["shop-api-check", "config", "init", "--force"]);
        match args.command {
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { output, force },
            }) => {
                assert_eq!(output, "shop-api-check.yaml");
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }
}
