//! Typography checks: font weights, text decorations, text transform and
//! font family diversity.

use crate::checks::{require_all, tally, Outcome, WHITESPACE};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// Required font weights, in narration order (numeric values first)
pub const REQUIRED_FONT_WEIGHTS: [&str; 4] = ["400", "700", "bold", "normal"];

/// Required text decorations, in narration order
pub const REQUIRED_TEXT_DECORATIONS: [&str; 4] = ["underline", "line-through", "overline", "none"];

/// Minimum number of distinct font families
pub const MIN_FONT_FAMILIES: usize = 6;

static FONT_WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"font-weight:{}*(bold|normal|400|700)", WHITESPACE))
        .expect("font-weight pattern is valid")
});

static TEXT_DECORATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"text-decoration:{}*(underline|line-through|overline|none)",
        WHITESPACE
    ))
    .expect("text-decoration pattern is valid")
});

static TEXT_TRANSFORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"text-transform:{}*(uppercase|capitalize|lowercase)", WHITESPACE))
        .expect("text-transform pattern is valid")
});

// Only the first quoted family of each declaration is captured.
static FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#"font-family:{}*["']([^"']+)["']"#, WHITESPACE))
        .expect("font-family pattern is valid")
});

/// Check that bold, normal, 400 and 700 each appear as a font weight
pub fn check_font_weights(stylesheet: &str) -> Outcome {
    let counts = tally(&FONT_WEIGHT, stylesheet, &REQUIRED_FONT_WEIGHTS);
    debug!(?counts, "font weights tallied");
    require_all("font weights", &counts)
}

/// Check that underline, line-through, overline and none each appear as a
/// text decoration
pub fn check_text_decorations(stylesheet: &str) -> Outcome {
    let counts = tally(&TEXT_DECORATION, stylesheet, &REQUIRED_TEXT_DECORATIONS);
    debug!(?counts, "text decorations tallied");
    require_all("text decorations", &counts)
}

/// Check for an uppercase text transform. Other transforms are detected but
/// not required.
pub fn check_text_transform(stylesheet: &str) -> Outcome {
    let found: Vec<&str> = TEXT_TRANSFORM
        .captures_iter(stylesheet)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    debug!(?found, "text transforms found");

    if found.contains(&"uppercase") {
        Outcome::new(true, "Found uppercase transformation")
            .mark(true, "Found uppercase transformation")
    } else if found.is_empty() {
        Outcome::new(false, "No text-transform declarations found")
            .mark(false, "Missing uppercase transformation")
    } else {
        Outcome::new(
            false,
            format!("Only found {} transformations", unique_in_order(found).join(", ")),
        )
        .mark(false, "Missing uppercase transformation")
    }
}

/// Check that at least six distinct font families are named.
///
/// Names compare exactly: `"Lobster"` and `"lobster"` are two families.
pub fn check_font_families(stylesheet: &str) -> Outcome {
    let families = unique_in_order(
        FONT_FAMILY
            .captures_iter(stylesheet)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect(),
    );
    debug!(?families, "font families collected");

    let count = families.len();
    if count >= MIN_FONT_FAMILIES {
        let message = format!("Found {} unique fonts: {}", count, families.join(", "));
        Outcome::new(true, message.clone()).mark(true, message)
    } else {
        Outcome::new(false, format!("Found {} unique fonts, need at least {}", count, MIN_FONT_FAMILIES))
            .mark(
                false,
                format!("Need at least {} unique fonts, found {}", MIN_FONT_FAMILIES, count),
            )
    }
}

/// Drop repeated values, keeping the first occurrence of each
fn unique_in_order(values: Vec<&str>) -> Vec<&str> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}
