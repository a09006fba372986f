//! Error types and handling infrastructure for scanning JSON documents

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Failure categories outside of JSON decoding
#[derive(Debug, thiserror::Error)]
pub enum ScanErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Input too large: {size} bytes (limit: {limit} bytes)")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Document nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ScanErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for scan operations
///
/// Decode failures are not errors here: they are part of an inspection.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("{kind}")]
    Scan {
        kind: ScanErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ScanError {
    pub fn scan(kind: ScanErrorKind) -> Self {
        Self::Scan { kind, source: None }
    }

    pub fn scan_with_source(kind: ScanErrorKind, source: anyhow::Error) -> Self {
        Self::Scan {
            kind,
            source: Some(source),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Scan { kind, .. } => match kind {
                ScanErrorKind::Io {
                    message,
                    path: Some(path),
                } => format!("Cannot read {}: {}", path.display(), message),
                ScanErrorKind::InputTooLarge { size, limit } => {
                    format!("Input too large: {} bytes (limit: {} bytes)", size, limit)
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// JSON decoding errors
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }

    /// Message, location and the offending line with a caret, when known
    pub fn detailed(&self) -> String {
        match &self.input_preview {
            Some(preview) => format!("{}\n{}", self, preview),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
