//! Command line arguments for ransom-check.
//!
//! Running with no arguments validates the project in the current directory
//! and streams the text report, so `check` is the default command.

use crate::checks::ALL_CHECK_IDS;
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command to execute
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the requirement checks (default)
    Check(CheckArgs),
    /// List all available checks
    List,
    /// Print version and build information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Live human-readable narration
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// JUnit XML for CI/CD integration
    Junit,
}

/// Options for a validation run
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct CheckArgs {
    /// Project directory containing css/styles.css and index.html
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Stylesheet to check instead of PROJECT_DIR/css/styles.css
    #[arg(long, value_name = "FILE")]
    pub css: Option<PathBuf>,

    /// HTML document to check instead of PROJECT_DIR/index.html
    #[arg(long, value_name = "FILE")]
    pub html: Option<PathBuf>,

    /// Run only this check (repeatable)
    #[arg(long, value_name = "ID", value_parser = PossibleValuesParser::new(ALL_CHECK_IDS))]
    pub only: Vec<String>,

    /// Skip this check (repeatable)
    #[arg(long, value_name = "ID", value_parser = PossibleValuesParser::new(ALL_CHECK_IDS))]
    pub skip: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only print failing checks and the final result
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log diagnostic detail to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        CheckArgs {
            project_dir: PathBuf::from("."),
            css: None,
            html: None,
            only: Vec::new(),
            skip: Vec::new(),
            format: OutputFormat::Text,
            quiet: false,
            verbose: false,
            no_color: false,
        }
    }
}

/// Parsed command line arguments
#[derive(Debug, Parser)]
#[command(
    name = "ransom-check",
    version,
    about = "Check a CSS ransom note project against the exercise requirements",
    args_conflicts_with_subcommands = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub check: CheckArgs,
}

impl Args {
    /// Resolve the command to run; bare options mean `check`
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Check(self.check))
    }
}
