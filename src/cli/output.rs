//! Output for ransom-check.
//!
//! Text output is narrated live: a [`ProgressReporter`] is called while the
//! run progresses and [`TerminalReporter`] writes each check's section as
//! soon as that check returns. JSON and JUnit XML are produced once, from
//! the finished [`ValidationReport`], by an [`OutputFormatter`].
//!
//! # Graceful Degradation
//!
//! - Color is disabled by `--no-color`, `NO_COLOR`, or a non-terminal stdout
//! - Empty reports produce valid output with zero checks
//! - A sink that stops accepting writes aborts the run with an output error

use crate::cli::args::OutputFormat;
use crate::engine::orchestrator::RegisteredCheck;
use crate::engine::result::{ResultSummary, ValidationReport};
use crate::inputs::InputKind;
use crate::{CheckResult, ValidatorError};
use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::{self, Write};

/// Width of the separator framing the final result
pub const SEPARATOR_WIDTH: usize = 50;

/// Hooks called as a validation run progresses.
///
/// Every hook defaults to doing nothing.
pub trait ProgressReporter {
    /// The run is starting
    fn started(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// An input file is about to be read
    fn input_loading(&mut self, _kind: InputKind) -> io::Result<()> {
        Ok(())
    }

    /// An input file was read completely
    fn input_loaded(&mut self, _kind: InputKind) -> io::Result<()> {
        Ok(())
    }

    /// A check is about to run
    fn check_started(&mut self, _check: &RegisteredCheck) -> io::Result<()> {
        Ok(())
    }

    /// A check returned
    fn check_finished(&mut self, _result: &CheckResult) -> io::Result<()> {
        Ok(())
    }

    /// All selected checks have run
    fn finished(&mut self, _report: &ValidationReport) -> io::Result<()> {
        Ok(())
    }
}

/// Reporter that prints nothing, for machine-readable output
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}

/// Streams the human-readable report to a writer
pub struct TerminalReporter<W: Write> {
    out: W,
    color: bool,
    quiet: bool,
    sections: usize,
    pending_heading: Option<String>,
}

impl<W: Write> TerminalReporter<W> {
    pub fn new(out: W, color: bool, quiet: bool) -> Self {
        TerminalReporter {
            out,
            color,
            quiet,
            sections: 0,
            pending_heading: None,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn write_heading(&mut self, heading: &str) -> io::Result<()> {
        if self.sections > 0 {
            writeln!(self.out)?;
        }
        self.sections += 1;
        let line = self.paint(&format!("📋 {}", heading), |s| s.bold());
        writeln!(self.out, "{}", line)
    }

    fn write_details(&mut self, result: &CheckResult) -> io::Result<()> {
        for detail in &result.details {
            let line = if detail.starts_with('✅') {
                self.paint(detail, |s| s.green())
            } else if detail.starts_with('❌') {
                self.paint(detail, |s| s.red())
            } else {
                detail.clone()
            };
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }
}

impl<W: Write> ProgressReporter for TerminalReporter<W> {
    fn started(&mut self) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "🔍 Validating CSS Ransom Note Requirements...")?;
        writeln!(self.out)
    }

    fn input_loading(&mut self, kind: InputKind) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Reading {} file...", kind.label())
    }

    fn input_loaded(&mut self, kind: InputKind) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{} file read successfully", kind.label())
    }

    fn check_started(&mut self, check: &RegisteredCheck) -> io::Result<()> {
        if self.quiet {
            // Heading is only printed if the check fails
            self.pending_heading = Some(check.heading.clone());
            return Ok(());
        }
        self.write_heading(&check.heading)?;
        self.out.flush()
    }

    fn check_finished(&mut self, result: &CheckResult) -> io::Result<()> {
        if self.quiet {
            let heading = self.pending_heading.take();
            if result.passed {
                return Ok(());
            }
            self.write_heading(heading.as_deref().unwrap_or(&result.name))?;
        }
        self.write_details(result)
    }

    fn finished(&mut self, report: &ValidationReport) -> io::Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);

        if self.sections > 0 {
            writeln!(self.out)?;
        }
        writeln!(self.out, "{}", separator)?;
        if report.overall_passed {
            let banner = self.paint("🎉 ALL REQUIREMENTS PASSED! 🎉", |s| s.green().bold());
            writeln!(self.out, "{}", banner)?;
            writeln!(self.out, "Your CSS Ransom Note meets all the project requirements.")?;
        } else {
            let banner = self.paint("❌ SOME REQUIREMENTS FAILED", |s| s.red().bold());
            writeln!(self.out, "{}", banner)?;
            writeln!(self.out, "Please fix the issues above and run the validation again.")?;
        }
        writeln!(self.out, "{}", separator)?;
        self.out.flush()
    }
}

/// Trait for whole-report output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> Result<String, ValidatorError>;
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a ValidationReport,
    summary: ResultSummary,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, ValidatorError> {
        let document = JsonReport {
            report,
            summary: report.summary(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }
}

/// JUnit XML formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct JunitFormatter;

impl JunitFormatter {
    pub fn new() -> Self {
        JunitFormatter
    }

    fn escape_xml(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '&' => result.push_str("&amp;"),
                '<' => result.push_str("&lt;"),
                '>' => result.push_str("&gt;"),
                '"' => result.push_str("&quot;"),
                '\'' => result.push_str("&apos;"),
                c => result.push(c),
            }
        }
        result
    }
}

impl OutputFormatter for JunitFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, ValidatorError> {
        let summary = report.summary();
        let time = report.total_duration_ms as f64 / 1000.0;

        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<testsuites tests=\"{}\" failures=\"{}\" errors=\"0\" time=\"{:.3}\">\n",
            summary.total, summary.failed, time
        ));
        output.push_str(&format!(
            "  <testsuite name=\"ransom-check\" tests=\"{}\" failures=\"{}\" errors=\"0\" skipped=\"0\" time=\"{:.3}\">\n",
            summary.total, summary.failed, time
        ));

        for result in &report.results {
            output.push_str(&format!(
                "    <testcase name=\"{}\" classname=\"ransom-check.{}\">\n",
                Self::escape_xml(&result.id),
                result.source
            ));

            let body = Self::escape_xml(&result.details.join("\n"));
            if result.passed {
                output.push_str(&format!("      <system-out>{}</system-out>\n", body));
            } else {
                output.push_str(&format!(
                    "      <failure message=\"{}\">{}</failure>\n",
                    Self::escape_xml(&result.message),
                    body
                ));
            }
            output.push_str("    </testcase>\n");
        }

        output.push_str("  </testsuite>\n");
        output.push_str("</testsuites>");
        Ok(output)
    }
}

/// Get the formatter for a whole-report format.
///
/// Returns `None` for [`OutputFormat::Text`], which is streamed by
/// [`TerminalReporter`] instead.
pub fn get_formatter(format: OutputFormat) -> Option<Box<dyn OutputFormatter>> {
    match format {
        OutputFormat::Text => None,
        OutputFormat::Json => Some(Box::new(JsonFormatter::new(true))),
        OutputFormat::Junit => Some(Box::new(JunitFormatter::new())),
    }
}
