//! Check execution orchestrator.
//!
//! Manages check registration, selection, and execution.
//!
//! Checks run one at a time in registration order. A failed check never
//! stops the run; the only way out early is a reporter that cannot write.
//! Each result is handed to the reporter as soon as its check returns, so
//! narration streams while the battery runs.

use crate::checks::{self, color, structure, typography, Outcome};
use crate::cli::output::ProgressReporter;
use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::inputs::{InputKind, Inputs};
use crate::{CheckResult, CheckSource, ValidatorError};
use std::time::Instant;
use tracing::debug;

/// Orchestrator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrchestratorConfig {
    /// Run only these check IDs (empty = all)
    pub only_checks: Vec<String>,
    /// Never run these check IDs
    pub skip_checks: Vec<String>,
}

/// A registered check with its execution function
pub struct RegisteredCheck {
    pub id: String,
    pub name: String,
    /// Progress line announcing the check
    pub heading: String,
    pub source: CheckSource,
    pub description: String,
    pub check_fn: Box<dyn Fn(&str) -> Outcome + Send + Sync>,
}

impl RegisteredCheck {
    /// Evaluate the check against its input
    pub fn evaluate(&self, inputs: &Inputs) -> CheckResult {
        let outcome = (self.check_fn)(inputs.text(self.source));
        CheckResult {
            id: self.id.clone(),
            name: self.name.clone(),
            source: self.source,
            passed: outcome.passed,
            message: outcome.message,
            details: outcome.details,
        }
    }
}

/// Check orchestrator
pub struct CheckOrchestrator {
    config: OrchestratorConfig,
    checks: Vec<RegisteredCheck>,
}

impl CheckOrchestrator {
    /// Create a new orchestrator with the given configuration
    pub fn new(config: OrchestratorConfig) -> Self {
        CheckOrchestrator {
            config,
            checks: Vec::new(),
        }
    }

    /// Create an orchestrator with the full requirement battery registered
    pub fn with_default_checks(config: OrchestratorConfig) -> Self {
        let mut orchestrator = CheckOrchestrator::new(config);
        orchestrator.register_checks(create_all_checks());
        orchestrator
    }

    /// Register checks for execution
    pub fn register_checks(&mut self, checks: Vec<RegisteredCheck>) {
        self.checks.extend(checks);
    }

    /// Register a single check
    pub fn register_check(&mut self, check: RegisteredCheck) {
        self.checks.push(check);
    }

    /// Checks selected by the only/skip configuration
    pub fn selected(&self) -> Vec<&RegisteredCheck> {
        self.checks
            .iter()
            .filter(|c| self.config.only_checks.is_empty() || self.config.only_checks.contains(&c.id))
            .filter(|c| !self.config.skip_checks.contains(&c.id))
            .collect()
    }

    /// Run every selected check against `inputs`, narrating to `reporter`
    pub fn run(
        &self,
        inputs: &Inputs,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<ValidationReport, ValidatorError> {
        let start = Instant::now();
        let mut aggregator = ResultAggregator::new();

        for check in self.selected() {
            reporter.check_started(check)?;

            let result = check.evaluate(inputs);
            debug!(check = %check.id, passed = result.passed, "check finished");

            reporter.check_finished(&result)?;
            aggregator.add_result(result);
        }

        aggregator.set_metadata(
            inputs.path(InputKind::Stylesheet).map(|p| p.to_path_buf()),
            inputs.path(InputKind::Markup).map(|p| p.to_path_buf()),
            start.elapsed().as_millis() as u64,
        );

        let report = aggregator.into_report();
        reporter.finished(&report)?;
        Ok(report)
    }
}

/// Create all registered checks with their execution functions
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck {
            id: checks::STYLE_GROUPS.to_string(),
            name: "Style Groups".to_string(),
            heading: format!(
                "Checking for at least {} unique styles...",
                structure::MIN_STYLE_GROUPS
            ),
            source: CheckSource::Stylesheet,
            description: "At least 10 '/* Style Group N */' comment markers".to_string(),
            check_fn: Box::new(structure::check_style_groups),
        },
        RegisteredCheck {
            id: checks::FONT_WEIGHTS.to_string(),
            name: "Font Weights".to_string(),
            heading: "Checking font weights...".to_string(),
            source: CheckSource::Stylesheet,
            description: "font-weight uses bold, normal, 400 and 700".to_string(),
            check_fn: Box::new(typography::check_font_weights),
        },
        RegisteredCheck {
            id: checks::TEXT_DECORATIONS.to_string(),
            name: "Text Decorations".to_string(),
            heading: "Checking text decorations...".to_string(),
            source: CheckSource::Stylesheet,
            description: "text-decoration uses underline, line-through, overline and none"
                .to_string(),
            check_fn: Box::new(typography::check_text_decorations),
        },
        RegisteredCheck {
            id: checks::TEXT_TRANSFORM.to_string(),
            name: "Text Transform".to_string(),
            heading: "Checking text transformations...".to_string(),
            source: CheckSource::Stylesheet,
            description: "text-transform: uppercase is used at least once".to_string(),
            check_fn: Box::new(typography::check_text_transform),
        },
        RegisteredCheck {
            id: checks::FONT_FAMILIES.to_string(),
            name: "Font Families".to_string(),
            heading: "Checking Google Fonts...".to_string(),
            source: CheckSource::Stylesheet,
            description: "At least 6 distinct quoted font-family names".to_string(),
            check_fn: Box::new(typography::check_font_families),
        },
        RegisteredCheck {
            id: checks::COLOR_SYSTEMS.to_string(),
            name: "Color Systems".to_string(),
            heading: "Checking color systems...".to_string(),
            source: CheckSource::Stylesheet,
            description: "At least 2 of hex, rgb, hsl, rgba and hsla notations".to_string(),
            check_fn: Box::new(color::check_color_systems),
        },
        RegisteredCheck {
            id: checks::INLINE_STYLES.to_string(),
            name: "No Inline Styles".to_string(),
            heading: "Checking for inline styles...".to_string(),
            source: CheckSource::Markup,
            description: "The HTML contains no style= attributes".to_string(),
            check_fn: Box::new(structure::check_inline_styles),
        },
        RegisteredCheck {
            id: checks::GROUPED_SELECTORS.to_string(),
            name: "Grouped Selectors".to_string(),
            heading: "Checking for grouped selectors...".to_string(),
            source: CheckSource::Stylesheet,
            description: "At least one rule lists several comma-separated selectors".to_string(),
            check_fn: Box::new(structure::check_grouped_selectors),
        },
    ]
}
