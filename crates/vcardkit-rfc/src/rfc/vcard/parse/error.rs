//! vCard parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for vCard parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error that occurred during vCard parsing.
///
/// Every error is terminal: parsing stops at the first one and no partial
/// result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: {message}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// Physical line number where the offending logical line starts (1-based).
    pub line: usize,
    /// Additional context, usually quoting the offending line.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// Creates a malformed content line error.
    #[must_use]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Syntax, line, message)
    }

    /// Creates a BEGIN/END grammar error.
    #[must_use]
    pub fn structural(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Structural, line, message)
    }

    /// Creates an unsupported version error naming the offending value.
    #[must_use]
    pub fn unsupported_version(line: usize, version: &str) -> Self {
        Self::new(
            ParseErrorKind::UnsupportedVersion,
            line,
            format!("Unsupported vCard version: {version}"),
        )
    }

    /// Creates a missing property error.
    #[must_use]
    pub fn missing_property(line: usize, name: &str) -> Self {
        Self::new(
            ParseErrorKind::MissingRequiredProperty,
            line,
            format!("missing required property: {name}"),
        )
    }

    /// Creates an error for input holding no vCard at all.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ParseErrorKind::EmptyInput, 1, "No vCard data found")
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Malformed content line or parameter.
    Syntax,
    /// BEGIN/END grammar violation.
    Structural,
    /// VERSION present but not 4.0.
    UnsupportedVersion,
    /// VERSION or FN absent at END.
    MissingRequiredProperty,
    /// No vCard found in the input.
    EmptyInput,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax error"),
            Self::Structural => write!(f, "structural error"),
            Self::UnsupportedVersion => write!(f, "unsupported version"),
            Self::MissingRequiredProperty => write!(f, "missing required property"),
            Self::EmptyInput => write!(f, "empty input"),
        }
    }
}
