//! Error types for gpxtree

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
///
/// The parse paths are deliberately lenient: unknown tags, unknown
/// attributes and malformed dates never produce an error. The only fatal
/// condition in the core is a precondition violation at a constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An email address that does not split into exactly one local part
    /// and one domain on `@`.
    MalformedEmail { address: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEmail { address } => {
                write!(f, "malformed email address: {address}")
            }
        }
    }
}

/// Main error type for gpxtree
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Result type alias for gpxtree
pub type Result<T> = std::result::Result<T, Error>;
