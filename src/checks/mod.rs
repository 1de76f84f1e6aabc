//! Requirement check modules.
//!
//! This module contains all requirement checks organized by concern:
//! - Structure: style group markers, grouped selectors, inline styles
//! - Typography: font weights, text decorations, text transform, font families
//! - Color: color notation diversity
//!
//! # Pattern Matching
//!
//! Checks scan raw text with regular expressions; nothing is parsed into a
//! CSS or HTML tree. A declaration inside a comment counts the same as a
//! real one, and a pattern that matches a prefix of a longer value (for
//! example `font-weight: 4000`) counts as that value.
//!
//! Checks never fail with an error. Every condition, including empty input,
//! produces an [`Outcome`] for the caller to report.

pub mod color;
pub mod structure;
pub mod typography;

pub const STYLE_GROUPS: &str = "style-groups";
pub const FONT_WEIGHTS: &str = "font-weights";
pub const TEXT_DECORATIONS: &str = "text-decorations";
pub const TEXT_TRANSFORM: &str = "text-transform";
pub const FONT_FAMILIES: &str = "font-families";
pub const COLOR_SYSTEMS: &str = "color-systems";
pub const INLINE_STYLES: &str = "inline-styles";
pub const GROUPED_SELECTORS: &str = "grouped-selectors";

/// Every check ID, in execution order
pub const ALL_CHECK_IDS: [&str; 8] = [
    STYLE_GROUPS,
    FONT_WEIGHTS,
    TEXT_DECORATIONS,
    TEXT_TRANSFORM,
    FONT_FAMILIES,
    COLOR_SYSTEMS,
    INLINE_STYLES,
    GROUPED_SELECTORS,
];

/// Whitespace class used between a property name and its value.
///
/// Differs from Unicode `\s`: it includes U+FEFF and excludes U+0085.
pub(crate) const WHITESPACE: &str = r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

/// Any character except a line terminator
pub(crate) const NOT_LINE_BREAK: &str = r"[^\n\r\x{2028}\x{2029}]";

/// Result of evaluating one check against its input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub passed: bool,
    pub message: String,
    pub details: Vec<String>,
}

impl Outcome {
    pub fn new(passed: bool, message: impl Into<String>) -> Self {
        Outcome {
            passed,
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Append a narrated diagnostic line
    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }

    /// Append a ✅ or ❌ line depending on `ok`
    pub fn mark(self, ok: bool, text: impl AsRef<str>) -> Self {
        self.detail(mark_line(ok, text.as_ref()))
    }
}

/// Prefix a narration line with its pass/fail marker
pub fn mark_line(ok: bool, text: &str) -> String {
    if ok {
        format!("✅ {}", text)
    } else {
        format!("❌ {}", text)
    }
}

/// Count occurrences of each expected capture value, keeping `values` order.
///
/// `pattern` must have one capture group holding the value.
pub(crate) fn tally<'a>(
    pattern: &regex::Regex,
    text: &str,
    values: &[&'a str],
) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = values.iter().map(|v| (*v, 0)).collect();

    for captures in pattern.captures_iter(text) {
        if let Some(value) = captures.get(1) {
            if let Some(entry) = counts.iter_mut().find(|(v, _)| *v == value.as_str()) {
                entry.1 += 1;
            }
        }
    }

    counts
}

/// Outcome for checks that require every listed value at least once.
pub(crate) fn require_all(label: &str, counts: &[(&str, usize)]) -> Outcome {
    let missing: Vec<&str> = counts
        .iter()
        .filter(|(_, count)| *count == 0)
        .map(|(value, _)| *value)
        .collect();

    let mut outcome = if missing.is_empty() {
        Outcome::new(true, format!("All {} {} present", counts.len(), label))
    } else {
        Outcome::new(false, format!("Missing {}: {}", label, missing.join(", ")))
    };

    for (value, count) in counts {
        outcome = if *count > 0 {
            outcome.mark(true, format!("{}: {} times", value, count))
        } else {
            outcome.mark(false, format!("{}: missing", value))
        };
    }

    outcome
}
