//! Result aggregation and reporting.
//!
//! Collects check results and generates summaries.

use crate::CheckResult;
use serde::Serialize;
use std::path::PathBuf;

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
    pub total: u32,
}

/// Validation report containing all check results
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub stylesheet_path: Option<PathBuf>,
    pub markup_path: Option<PathBuf>,
    pub results: Vec<CheckResult>,
    /// True iff every result passed
    pub overall_passed: bool,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        summarize(&self.results)
    }

    /// Look up a result by check ID
    pub fn result(&self, id: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Only the failed results
    pub fn failures(&self) -> Vec<&CheckResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }
}

fn summarize(results: &[CheckResult]) -> ResultSummary {
    let mut summary = ResultSummary::default();

    for result in results {
        summary.total += 1;
        if result.passed {
            summary.passed += 1;
        } else {
            summary.failed += 1;
        }
    }

    summary
}

/// Result aggregator for collecting check results
#[derive(Debug, Default)]
pub struct ResultAggregator {
    results: Vec<CheckResult>,
    stylesheet_path: Option<PathBuf>,
    markup_path: Option<PathBuf>,
    total_duration_ms: u64,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Set report metadata
    pub fn set_metadata(
        &mut self,
        stylesheet_path: Option<PathBuf>,
        markup_path: Option<PathBuf>,
        total_duration_ms: u64,
    ) {
        self.stylesheet_path = stylesheet_path;
        self.markup_path = markup_path;
        self.total_duration_ms = total_duration_ms;
    }

    /// Add a completed check result
    pub fn add_result(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Check if there are any failures
    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| !r.passed)
    }

    /// Create final validation report
    pub fn into_report(self) -> ValidationReport {
        let overall_passed = !self.has_failures();
        ValidationReport {
            stylesheet_path: self.stylesheet_path,
            markup_path: self.markup_path,
            results: self.results,
            overall_passed,
            total_duration_ms: self.total_duration_ms,
        }
    }
}
