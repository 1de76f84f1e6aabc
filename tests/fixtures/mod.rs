//! Project fixtures for testing without a real exercise submission.
//!
//! Provides a stylesheet/markup pair that satisfies every requirement, plus
//! variants that each break exactly one requirement, and helpers that lay
//! them out as a project directory on disk.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A single requirement to break in an otherwise passing fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooFewStyleGroups,
    MissingFontWeight,
    MissingTextDecoration,
    NoUppercase,
    TooFewFontFamilies,
    SingleColorSystem,
    InlineStyle,
    NoGroupedSelector,
}

impl Violation {
    pub const ALL: [Violation; 8] = [
        Violation::TooFewStyleGroups,
        Violation::MissingFontWeight,
        Violation::MissingTextDecoration,
        Violation::NoUppercase,
        Violation::TooFewFontFamilies,
        Violation::SingleColorSystem,
        Violation::InlineStyle,
        Violation::NoGroupedSelector,
    ];

    /// ID of the only check this violation should fail
    pub fn check_id(&self) -> &'static str {
        match self {
            Violation::TooFewStyleGroups => "style-groups",
            Violation::MissingFontWeight => "font-weights",
            Violation::MissingTextDecoration => "text-decorations",
            Violation::NoUppercase => "text-transform",
            Violation::TooFewFontFamilies => "font-families",
            Violation::SingleColorSystem => "color-systems",
            Violation::InlineStyle => "inline-styles",
            Violation::NoGroupedSelector => "grouped-selectors",
        }
    }
}

/// Declarative description of a stylesheet
#[derive(Debug, Clone)]
pub struct StylesheetFixture {
    pub style_groups: usize,
    pub font_weights: Vec<&'static str>,
    pub decorations: Vec<&'static str>,
    pub transforms: Vec<&'static str>,
    pub families: Vec<&'static str>,
    pub colors: Vec<&'static str>,
    pub grouped_selector: bool,
}

impl Default for StylesheetFixture {
    /// A stylesheet that passes every check
    fn default() -> Self {
        StylesheetFixture {
            style_groups: 10,
            font_weights: vec!["bold", "normal", "400", "700"],
            decorations: vec!["underline", "line-through", "overline", "none"],
            transforms: vec!["uppercase", "capitalize"],
            families: vec!["Bungee", "Lobster", "Pacifico", "Roboto Mono", "Creepster", "Monoton"],
            colors: vec!["#c0ffee", "rgba(0, 0, 0, 0.5)", "hsl(120, 50%, 40%)"],
            grouped_selector: true,
        }
    }
}

impl StylesheetFixture {
    /// Passing stylesheet with one requirement broken
    pub fn violating(violation: Violation) -> Self {
        let mut fixture = StylesheetFixture::default();
        match violation {
            Violation::TooFewStyleGroups => fixture.style_groups = 9,
            Violation::MissingFontWeight => fixture.font_weights.retain(|w| *w != "700"),
            Violation::MissingTextDecoration => fixture.decorations.retain(|d| *d != "overline"),
            Violation::NoUppercase => fixture.transforms.retain(|t| *t != "uppercase"),
            Violation::TooFewFontFamilies => {
                fixture.families.pop();
            }
            Violation::SingleColorSystem => fixture.colors = vec!["#c0ffee", "#abc"],
            Violation::NoGroupedSelector => fixture.grouped_selector = false,
            Violation::InlineStyle => {}
        }
        fixture
    }

    /// Render to CSS text, one declaration per rule
    pub fn render(&self) -> String {
        let mut css = String::new();

        for i in 1..=self.style_groups {
            css.push_str(&format!("/* Style Group {} */\n", i));
        }

        let declarations = self
            .font_weights
            .iter()
            .map(|v| format!("font-weight: {};", v))
            .chain(self.decorations.iter().map(|v| format!("text-decoration: {};", v)))
            .chain(self.transforms.iter().map(|v| format!("text-transform: {};", v)))
            .chain(self.families.iter().map(|v| format!("font-family: \"{}\", cursive;", v)))
            .chain(self.colors.iter().map(|v| format!("color: {};", v)));

        for (i, declaration) in declarations.enumerate() {
            css.push_str(&format!(".letter-{} {{\n  {}\n}}\n\n", i + 1, declaration));
        }

        if self.grouped_selector {
            css.push_str("h1,\nh2 {\n  margin: 0;\n}\n");
        }

        css
    }
}

/// Markup with no inline styles
pub fn passing_markup() -> String {
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head>\n  <link rel=\"stylesheet\" href=\"css/styles.css\">\n</head>\n\
     <body>\n  <h1 class=\"letter-1\">Ransom</h1>\n  <p class=\"letter-2\">Note</p>\n</body>\n\
     </html>\n"
        .to_string()
}

/// Markup carrying one inline style attribute
pub fn inline_style_markup() -> String {
    passing_markup().replace("<p class=\"letter-2\">", "<div style=\"color:red\">")
}

/// Stylesheet and markup for a fixture breaking `violation`
pub fn violating_pair(violation: Violation) -> (String, String) {
    let css = StylesheetFixture::violating(violation).render();
    let html = if violation == Violation::InlineStyle {
        inline_style_markup()
    } else {
        passing_markup()
    };
    (css, html)
}

/// Write a project directory with `css/styles.css` and `index.html`
pub fn write_project(root: &Path, css: &str, html: &str) {
    fs::create_dir_all(root.join("css")).expect("create css dir");
    fs::write(root.join("css").join("styles.css"), css).expect("write stylesheet");
    fs::write(root.join("index.html"), html).expect("write markup");
}

/// A temporary project directory holding the given pair
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new(css: &str, html: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        write_project(dir.path(), css, html);
        TempProject { dir }
    }

    /// Project that passes every check
    pub fn passing() -> Self {
        TempProject::new(&StylesheetFixture::default().render(), &passing_markup())
    }

    /// Project breaking exactly one requirement
    pub fn violating(violation: Violation) -> Self {
        let (css, html) = violating_pair(violation);
        TempProject::new(&css, &html)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn stylesheet_path(&self) -> PathBuf {
        self.path().join("css").join("styles.css")
    }

    pub fn markup_path(&self) -> PathBuf {
        self.path().join("index.html")
    }
}
