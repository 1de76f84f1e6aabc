//! Input loading.
//!
//! A project is expected to keep its stylesheet at `css/styles.css` and its
//! document at `index.html`. Both are read to completion and closed before
//! any check runs; checks only ever see the immutable text.

use crate::{CheckSource, ValidatorError};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Stylesheet location relative to the project directory
pub const STYLESHEET_RELATIVE_PATH: [&str; 2] = ["css", "styles.css"];

/// Markup location relative to the project directory
pub const MARKUP_RELATIVE_PATH: &str = "index.html";

/// The two kinds of input a run consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Stylesheet,
    Markup,
}

impl InputKind {
    /// Short label used in progress narration ("Reading CSS file...")
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Stylesheet => "CSS",
            InputKind::Markup => "HTML",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Default path of an input inside a project directory
pub fn default_path(project_dir: &Path, kind: InputKind) -> PathBuf {
    match kind {
        InputKind::Stylesheet => STYLESHEET_RELATIVE_PATH
            .iter()
            .fold(project_dir.to_path_buf(), |path, part| path.join(part)),
        InputKind::Markup => project_dir.join(MARKUP_RELATIVE_PATH),
    }
}

/// Read one input file completely.
///
/// Missing files, permission problems and invalid UTF-8 all map to
/// [`ValidatorError::InputUnavailable`].
pub fn read_source(kind: InputKind, path: &Path) -> Result<String, ValidatorError> {
    debug!(kind = %kind, path = %path.display(), "reading input");

    let text = fs::read_to_string(path).map_err(|source| ValidatorError::InputUnavailable {
        kind,
        path: path.to_path_buf(),
        source,
    })?;

    debug!(kind = %kind, bytes = text.len(), "input read");
    Ok(text)
}

/// Immutable text of both inputs for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    stylesheet: String,
    markup: String,
    stylesheet_path: Option<PathBuf>,
    markup_path: Option<PathBuf>,
}

impl Inputs {
    pub fn new(stylesheet: impl Into<String>, markup: impl Into<String>) -> Self {
        Inputs {
            stylesheet: stylesheet.into(),
            markup: markup.into(),
            stylesheet_path: None,
            markup_path: None,
        }
    }

    /// Record where the texts were read from
    pub fn with_paths(mut self, stylesheet_path: PathBuf, markup_path: PathBuf) -> Self {
        self.stylesheet_path = Some(stylesheet_path);
        self.markup_path = Some(markup_path);
        self
    }

    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Text a check of the given source scans
    pub fn text(&self, source: CheckSource) -> &str {
        match source {
            CheckSource::Stylesheet => &self.stylesheet,
            CheckSource::Markup => &self.markup,
        }
    }

    pub fn path(&self, kind: InputKind) -> Option<&Path> {
        match kind {
            InputKind::Stylesheet => self.stylesheet_path.as_deref(),
            InputKind::Markup => self.markup_path.as_deref(),
        }
    }
}
