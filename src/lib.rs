//! ransom-check library
//!
//! Static requirements checker for the CSS "ransom note" styling exercise.
//!
//! A run reads a stylesheet and an HTML document, then executes a fixed
//! battery of eight pattern checks against them:
//! - Style group comment markers (at least 10)
//! - Font weights (bold, normal, 400 and 700)
//! - Text decorations (underline, line-through, overline and none)
//! - An uppercase text transform
//! - At least 6 distinct font families
//! - At least 2 color notations (hex, rgb, hsl, rgba, hsla)
//! - No inline `style=` attributes in the markup
//! - At least one grouped selector
//!
//! Every check always runs; the run passes only if all of them pass.
//!
//! # Example
//!
//! ```no_run
//! use ransom_check::cli::output::SilentReporter;
//! use ransom_check::{run_validation, ValidatorConfig};
//!
//! let config = ValidatorConfig::default();
//! let report = run_validation(&config, &mut SilentReporter).expect("inputs readable");
//! println!("Checks passed: {}", report.summary().passed);
//! ```

pub mod checks;
pub mod cli;
pub mod engine;
pub mod inputs;
pub mod version;

use cli::args::CheckArgs;
use cli::output::ProgressReporter;
use engine::orchestrator::{CheckOrchestrator, OrchestratorConfig};
use engine::result::ValidationReport;
use inputs::{InputKind, Inputs};
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Which input a check scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSource {
    /// The CSS stylesheet
    Stylesheet,
    /// The HTML document
    Markup,
}

impl fmt::Display for CheckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckSource::Stylesheet => write!(f, "stylesheet"),
            CheckSource::Markup => write!(f, "markup"),
        }
    }
}

/// Outcome of one requirement check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Stable identifier (e.g., "font-weights")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Input the check scanned
    pub source: CheckSource,
    /// Whether the requirement is met
    pub passed: bool,
    /// One-line verdict
    pub message: String,
    /// Diagnostic lines, in the order they are narrated
    pub details: Vec<String>,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "{}: {} ({})", status, self.name, self.message)
    }
}

/// Error types for ransom-check operations.
///
/// A requirement that is not met is never an error; it is a failed
/// [`CheckResult`]. Errors abort the run before or after the checks.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// An input file is missing or unreadable
    #[error("cannot read {kind} file '{}': {source}", .path.display())]
    InputUnavailable {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The progress reporter could not write its output
    #[error("failed to write report output: {0}")]
    Output(#[from] io::Error),

    /// The report could not be serialized
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Configuration for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Stylesheet to scan
    pub stylesheet_path: PathBuf,
    /// HTML document to scan
    pub markup_path: PathBuf,
    /// Specific checks to run (by ID)
    pub only_checks: Vec<String>,
    /// Specific checks to skip (by ID)
    pub skip_checks: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig::for_project(Path::new("."))
    }
}

impl ValidatorConfig {
    /// Configuration using the conventional layout of a project directory
    pub fn for_project(project_dir: &Path) -> Self {
        ValidatorConfig {
            stylesheet_path: inputs::default_path(project_dir, InputKind::Stylesheet),
            markup_path: inputs::default_path(project_dir, InputKind::Markup),
            only_checks: Vec::new(),
            skip_checks: Vec::new(),
        }
    }

    /// Create configuration from command line arguments
    pub fn from_args(args: &CheckArgs) -> Self {
        let mut config = ValidatorConfig::for_project(&args.project_dir);

        if let Some(ref css) = args.css {
            config.stylesheet_path = css.clone();
        }
        if let Some(ref html) = args.html {
            config.markup_path = html.clone();
        }
        config.only_checks = args.only.clone();
        config.skip_checks = args.skip.clone();

        config
    }

    fn orchestrator_config(&self) -> OrchestratorConfig {
        OrchestratorConfig {
            only_checks: self.only_checks.clone(),
            skip_checks: self.skip_checks.clone(),
        }
    }
}

/// Run the requirement checks against files on disk.
///
/// Both inputs are read completely before any check runs. If either cannot
/// be read the run stops with [`ValidatorError::InputUnavailable`] and no
/// check is executed.
///
/// # Example
///
/// ```no_run
/// use ransom_check::cli::output::SilentReporter;
/// use ransom_check::{run_validation, ValidatorConfig};
/// use std::path::Path;
///
/// let config = ValidatorConfig::for_project(Path::new("my-ransom-note"));
/// match run_validation(&config, &mut SilentReporter) {
///     Ok(report) => {
///         let summary = report.summary();
///         println!("Passed: {}, Failed: {}", summary.passed, summary.failed);
///     }
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_validation(
    config: &ValidatorConfig,
    reporter: &mut dyn ProgressReporter,
) -> Result<ValidationReport, ValidatorError> {
    reporter.started()?;

    reporter.input_loading(InputKind::Stylesheet)?;
    let stylesheet = inputs::read_source(InputKind::Stylesheet, &config.stylesheet_path)?;
    reporter.input_loaded(InputKind::Stylesheet)?;

    reporter.input_loading(InputKind::Markup)?;
    let markup = inputs::read_source(InputKind::Markup, &config.markup_path)?;
    reporter.input_loaded(InputKind::Markup)?;

    let inputs = Inputs::new(stylesheet, markup)
        .with_paths(config.stylesheet_path.clone(), config.markup_path.clone());

    CheckOrchestrator::with_default_checks(config.orchestrator_config()).run(&inputs, reporter)
}

/// Run every requirement check against in-memory inputs.
pub fn run(
    inputs: &Inputs,
    reporter: &mut dyn ProgressReporter,
) -> Result<ValidationReport, ValidatorError> {
    CheckOrchestrator::with_default_checks(OrchestratorConfig::default()).run(inputs, reporter)
}
