use serde::Serialize;

use crate::cst::Range;
use crate::text::position::line_col;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidOffset,
    Semantic,
    Io,
}

/// A byte offset together with its 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn from_offset(src: &str, offset: usize) -> Self {
        let (line, column) = line_col(src, offset);
        Self {
            offset,
            line,
            column,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}{}", location_suffix(.location))]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

fn location_suffix(location: &Option<Location>) -> String {
    match location {
        Some(location) => format!(" at line {}, column {}", location.line, location.column),
        None => String::new(),
    }
}

impl Error {
    pub fn invalid_offset(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidOffset,
            message: message.into(),
            location: None,
        }
    }

    pub fn semantic(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Semantic,
            message: message.into(),
            location: None,
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Io,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(format!("read failed: {err}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "char", rename_all = "snake_case")]
pub enum SemanticErrorKind {
    /// A plain scalar opened with a tab or a reserved indicator.
    IllegalLeadingChar(char),
}

/// A diagnostic attached to a node rather than raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct SemanticError {
    pub kind: SemanticErrorKind,
    pub range: Range,
    pub message: String,
}

impl SemanticError {
    pub fn illegal_leading_char(ch: char, range: Range) -> Self {
        let message = match ch {
            '\t' => "Plain value cannot start with a tab character".to_string(),
            _ => format!("Plain value cannot start with reserved character {ch}"),
        };
        Self {
            kind: SemanticErrorKind::IllegalLeadingChar(ch),
            range,
            message,
        }
    }

    pub fn location(&self, src: &str) -> Location {
        Location::from_offset(src, self.range.start)
    }

    /// Promote the diagnostic to a located crate error.
    pub fn into_error(self, src: &str) -> Error {
        let location = self.location(src);
        Error::semantic(self.message).with_location(location)
    }
}
