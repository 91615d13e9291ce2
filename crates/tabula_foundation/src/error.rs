//! Error types for Tabula.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for Tabula operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates an invalid argument error naming the expected and found kinds.
    #[must_use]
    pub fn unexpected_type(expected: &str, actual: Type) -> Self {
        Self::invalid_argument(format!("expected {expected}, got {actual}"))
    }

    /// Creates an out of bounds error.
    #[must_use]
    pub fn out_of_bounds(index: i64, length: usize) -> Self {
        Self::new(ErrorKind::OutOfBounds { index, length })
    }

    /// Creates a general failure raised by caller code.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failure(message.into()))
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument(_))
    }

    /// Returns true if this is an out of bounds error.
    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ErrorKind::OutOfBounds { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// An argument had the wrong shape (non-numeric index, non-indexable data).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Index outside `[0, length - 1]`.
    #[error("index out of bounds: {index} (length {length})")]
    OutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the indexed data.
        length: usize,
    },

    /// Failure raised explicitly by caller code.
    #[error("{0}")]
    Failure(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation that raised the error.
    pub operation: Option<String>,
    /// Call frames, innermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "at {operation}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
