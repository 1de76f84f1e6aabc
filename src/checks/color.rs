//! Color notation diversity check.
//!
//! Each notation is counted by its own scan. The functional patterns require
//! `(` straight after the name, so `rgb(` never matches inside `rgba(` and
//! `hsl(` never matches inside `hsla(`: every occurrence lands in exactly
//! one category.

use crate::checks::Outcome;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

/// Minimum number of notations that must be used
pub const MIN_COLOR_SYSTEMS: usize = 2;

/// A textual syntax for a color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorNotation {
    Hex,
    Rgb,
    Hsl,
    Rgba,
    Hsla,
}

impl ColorNotation {
    /// All notations, in reporting order
    pub const ALL: [ColorNotation; 5] = [
        ColorNotation::Hex,
        ColorNotation::Rgb,
        ColorNotation::Hsl,
        ColorNotation::Rgba,
        ColorNotation::Hsla,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            ColorNotation::Hex => &HEX,
            ColorNotation::Rgb => &RGB,
            ColorNotation::Hsl => &HSL,
            ColorNotation::Rgba => &RGBA,
            ColorNotation::Hsla => &HSLA,
        }
    }

    /// Number of occurrences of this notation in `text`
    pub fn count(&self, text: &str) -> usize {
        self.pattern().find_iter(text).count()
    }
}

impl fmt::Display for ColorNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorNotation::Hex => write!(f, "hex"),
            ColorNotation::Rgb => write!(f, "rgb"),
            ColorNotation::Hsl => write!(f, "hsl"),
            ColorNotation::Rgba => write!(f, "rgba"),
            ColorNotation::Hsla => write!(f, "hsla"),
        }
    }
}

// {3,6} also accepts 4 and 5 digit runs.
static HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,6}").expect("hex pattern is valid"));
static RGB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgb\([^)]+\)").expect("rgb pattern is valid"));
static HSL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hsl\([^)]+\)").expect("hsl pattern is valid"));
static RGBA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rgba\([^)]+\)").expect("rgba pattern is valid"));
static HSLA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"hsla\([^)]+\)").expect("hsla pattern is valid"));

/// Check that at least two color notations are used
pub fn check_color_systems(stylesheet: &str) -> Outcome {
    let used: Vec<(ColorNotation, usize)> = ColorNotation::ALL
        .iter()
        .map(|notation| (*notation, notation.count(stylesheet)))
        .filter(|(_, count)| *count > 0)
        .collect();
    debug!(?used, "color notations counted");

    let listing = used
        .iter()
        .map(|(notation, count)| format!("{}({})", notation, count))
        .collect::<Vec<_>>()
        .join(", ");

    if used.len() >= MIN_COLOR_SYSTEMS {
        let message = format!("Found {} color systems: {}", used.len(), listing);
        Outcome::new(true, message.clone()).mark(true, message)
    } else {
        let message = if used.is_empty() {
            "No color notations found".to_string()
        } else {
            format!("Only found {}", listing)
        };
        Outcome::new(false, message).mark(
            false,
            format!(
                "Need at least {} color systems, found {}",
                MIN_COLOR_SYSTEMS,
                used.len()
            ),
        )
    }
}
