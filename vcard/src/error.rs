// src/error.rs
//! Error types for vCard loading and parsing.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for parsing a single vCard document.
pub type ParseResult<T> = Result<T, ParseError>;

/// Structural error found while splitting a document into records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
}

impl ParseError {
    #[inline]
    #[must_use]
    pub const fn new(kind: ParseErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// `BEGIN:VCARD` while a record is still open.
    NestedBegin,
    /// `END:VCARD` with no open record.
    UnmatchedEnd,
    /// Input ended while a record was still open.
    UnterminatedRecord,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::NestedBegin => "BEGIN:VCARD inside an open vCard",
            Self::UnmatchedEnd => "END:VCARD without a matching BEGIN:VCARD",
            Self::UnterminatedRecord => "vCard not closed with END:VCARD",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced to the user by the library entry points.
#[derive(Debug, Error)]
pub enum VCardError {
    /// Missing or insufficient arguments. Carries the usage hint to print.
    #[error("{0}")]
    Usage(String),

    #[error("malformed vCard in {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{} is not valid UTF-8 or UTF-16 text", path.display())]
    Encoding { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no files match pattern '{pattern}'")]
    NoMatches { pattern: String },

    #[error("invalid glob pattern '{pattern}'")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to walk directory {}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to parse config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl VCardError {
    #[inline]
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
