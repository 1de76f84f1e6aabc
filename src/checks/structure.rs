//! Structural checks: style group markers, grouped selectors and inline styles.

use crate::checks::{Outcome, NOT_LINE_BREAK};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Minimum number of `/* Style Group N */` markers
pub const MIN_STYLE_GROUPS: usize = 10;

/// Literal that marks an inline style attribute in markup
pub const INLINE_STYLE_MARKER: &str = "style=";

// A marker comment must close on its own line. Only ASCII digits number it.
static STYLE_GROUP_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"/\* Style Group [0-9]+{}*?\*/", NOT_LINE_BREAK))
        .expect("style group pattern is valid")
});

// Everything since the previous `}` up to a `{ ... }` body.
static RULE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^}]+)\{[^}]*\}").expect("rule block pattern is valid")
});

/// Check that the stylesheet declares at least ten style groups
pub fn check_style_groups(stylesheet: &str) -> Outcome {
    let count = STYLE_GROUP_MARKER.find_iter(stylesheet).count();
    debug!(count, "style group markers scanned");

    let found = format!("Style group comments found: {}", count);

    if count >= MIN_STYLE_GROUPS {
        Outcome::new(true, format!("Found {} style groups", count))
            .detail(found)
            .mark(true, format!("Found {} style groups", count))
    } else {
        Outcome::new(
            false,
            format!("Found {} style groups, need at least {}", count, MIN_STYLE_GROUPS),
        )
        .detail(found)
        .mark(false, format!("Need at least {} unique style groups", MIN_STYLE_GROUPS))
    }
}

/// Check that the markup carries no inline `style=` attributes
pub fn check_inline_styles(markup: &str) -> Outcome {
    let occurrences = markup.matches(INLINE_STYLE_MARKER).count();
    debug!(occurrences, "inline style markers scanned");

    if occurrences == 0 {
        Outcome::new(true, "No inline styles found").mark(true, "No inline styles found")
    } else {
        Outcome::new(false, format!("Found {} inline style attributes", occurrences))
            .mark(false, "Inline styles found - remove them")
    }
}

/// Check that at least one rule shares its body between several selectors.
///
/// The selector portion is the text captured before the `{` that opens the
/// matched body. It reaches back to the previous `}`, so it can include a
/// preceding comment or an enclosing at-rule header such as `@media screen {`.
pub fn check_grouped_selectors(stylesheet: &str) -> Outcome {
    let mut blocks = 0usize;
    let mut grouped: Option<&str> = None;

    for captures in RULE_BLOCK.captures_iter(stylesheet) {
        blocks += 1;
        if let Some(selector) = captures.get(1) {
            if selector.as_str().contains(',') {
                grouped = Some(selector.as_str().trim());
                break;
            }
        }
    }

    debug!(blocks, grouped = grouped.is_some(), "rule blocks scanned");

    match grouped {
        Some(selector) => Outcome::new(true, format!("Found grouped selector '{}'", selector))
            .mark(true, "Found grouped selectors"),
        None => Outcome::new(false, "No rule block shares selectors")
            .mark(false, "No grouped selectors found"),
    }
}
