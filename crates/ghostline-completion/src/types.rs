//! Shared data model for the completion post-processing engine
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for completion operations
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Errors surfaced by the ambient layers of the engine
///
/// The post-processing operations themselves (rule evaluation, duplication
/// resolution, window maintenance) are total over well-formed inputs and
/// never construct these; configuration loading and the model seam do.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Invalid or unreadable engine configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Filesystem failure while loading configuration
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    /// JSON serialization or deserialization failure
    #[error("Serialization error: {0}")]
    SerializationError(serde_json::Error),
    /// YAML deserialization failure
    #[error("YAML error: {0}")]
    YamlError(serde_yaml::Error),
    /// Failure inside an external collaborator (model layer)
    #[error("Internal error: {0}")]
    InternalError(String),
}

ghostline_common::impl_errors_from!(CompletionError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    YamlError(serde_yaml::Error),
});

/// A cursor position in a document (zero-based line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Editor indentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndentSettings {
    /// Indent with spaces rather than tabs
    #[serde(default = "default_insert_spaces")]
    pub insert_spaces: bool,
    /// Width of one indent unit when indenting with spaces
    #[serde(default = "default_tab_size")]
    pub tab_size: usize,
}

fn default_insert_spaces() -> bool {
    true
}

fn default_tab_size() -> usize {
    4
}

impl IndentSettings {
    /// One indent unit under these settings
    pub fn indent_unit(&self) -> String {
        if self.insert_spaces {
            " ".repeat(self.tab_size)
        } else {
            "\t".to_string()
        }
    }
}

impl Default for IndentSettings {
    fn default() -> Self {
        Self {
            insert_spaces: default_insert_spaces(),
            tab_size: default_tab_size(),
        }
    }
}

/// How a completion should be merged into the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingDecision {
    /// Insert the completion on a new line
    pub insert_on_new_line: bool,
    /// Leading whitespace for the new line (empty for inline insertion)
    pub indentation: String,
}

impl FormattingDecision {
    /// Insert inline at the cursor, no added indentation
    pub fn inline() -> Self {
        Self {
            insert_on_new_line: false,
            indentation: String::new(),
        }
    }

    /// Insert on a new line with the given indentation
    pub fn line_break(indentation: String) -> Self {
        Self {
            insert_on_new_line: true,
            indentation,
        }
    }
}

/// Final insertable text and the single point where it must be spliced
///
/// The anchor always equals the request cursor: the engine only changes
/// what is inserted, never where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertableCompletion {
    pub text: String,
    pub anchor: Position,
}

impl InsertableCompletion {
    /// The empty result, signaling "no suggestion"
    pub fn empty(anchor: Position) -> Self {
        Self {
            text: String::new(),
            anchor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Owned line-indexed view of a document, as handed over by the host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentSnapshot {
    lines: Vec<String>,
}

impl DocumentSnapshot {
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text of `position.line` from column 0 up to `position.column`
    ///
    /// Clipped to the line's length; lines outside the document yield an
    /// empty prefix.
    pub fn line_prefix(&self, position: Position) -> String {
        self.line(position.line)
            .map(|line| line.chars().take(position.column).collect())
            .unwrap_or_default()
    }

    /// Range text accessor, clipped to document bounds
    ///
    /// Columns are counted in characters. Any combination of out-of-range
    /// indices is clipped rather than rejected.
    pub fn get_text(
        &self,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> String {
        if self.lines.is_empty() {
            return String::new();
        }

        let last = self.lines.len() - 1;
        let start_line = start_line.min(last);
        let end_line = end_line.min(last);
        if start_line > end_line {
            return String::new();
        }

        if start_line == end_line {
            let line = &self.lines[start_line];
            let end_col = end_col.min(line.chars().count());
            let start_col = start_col.min(end_col);
            return line
                .chars()
                .skip(start_col)
                .take(end_col - start_col)
                .collect();
        }

        let mut parts = Vec::with_capacity(end_line - start_line + 1);
        parts.push(self.lines[start_line].chars().skip(start_col).collect::<String>());
        for line in &self.lines[start_line + 1..end_line] {
            parts.push(line.clone());
        }
        let tail = &self.lines[end_line];
        parts.push(tail.chars().take(end_col).collect::<String>());
        parts.join("\n")
    }
}

/// Clipped span of document text within a fixed line radius of the cursor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NeighborhoodSnapshot {
    pub text: String,
    /// First line of the span (inclusive)
    pub start_line: usize,
    /// End of the span (exclusive)
    pub end_line: usize,
}

/// Read-only composed view of recent document and interaction state
///
/// Rebuilt on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserContextBundle {
    /// Most recent lines of the active document, document order preserved
    pub recent_lines: Vec<String>,
    /// Previously accepted completions, oldest first
    pub accepted_suggestions: Vec<String>,
    /// Contiguous text around the cursor
    pub surrounding_context: String,
}

impl UserContextBundle {
    pub fn is_empty(&self) -> bool {
        self.recent_lines.is_empty()
            && self.accepted_suggestions.is_empty()
            && self.surrounding_context.is_empty()
    }
}
