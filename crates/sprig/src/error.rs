//! Error types shared across sprig.

use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
    io,
    result::Result as StdResult,
};

use thiserror::Error;

use crate::registry::ElementId;

/// Result type for sprig operations.
pub type Result<T> = StdResult<T, Error>;

/// The stage at which a script failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptErrorKind {
    /// The chunk did not parse.
    Syntax,
    /// The chunk raised an error while running.
    Runtime,
    /// The chunk exceeded its instruction budget or wall-clock timeout.
    Timeout,
    /// The chunk was stopped through its cancel token.
    Cancelled,
    /// The runtime ran out of its memory allowance.
    Memory,
}

impl Display for ScriptErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Syntax => "syntax",
            Self::Runtime => "runtime",
            Self::Timeout => "timeout",
            Self::Cancelled => "cancelled",
            Self::Memory => "memory",
        })
    }
}

/// A script failure caught at the execution boundary.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ScriptError {
    /// Failure category.
    pub kind: ScriptErrorKind,
    /// Message reported by the runtime.
    pub message: String,
    /// Source line, when the runtime reported one.
    pub line: Option<usize>,
    /// Source column, when the runtime reported one.
    pub column: Option<usize>,
}

impl ScriptError {
    /// Construct a script error without location information.
    pub fn new(kind: ScriptErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Attach optional line/column information.
    pub fn with_position(mut self, line: Option<usize>, column: Option<usize>) -> Self {
        self.line = line;
        self.column = column;
        self
    }
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        match (self.line, self.column) {
            (Some(line), Some(column)) => write!(f, " (line {line}, column {column})"),
            (Some(line), None) => write!(f, " (line {line})"),
            (None, Some(column)) => write!(f, " (column {column})"),
            (None, None) => Ok(()),
        }
    }
}

impl StdError for ScriptError {}

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// Dispatch met a variant name or tag with no initializer.
    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    /// Construction arguments or attribute values have the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Script failed to parse or run.
    #[error("script error: {0}")]
    Script(#[source] ScriptError),

    /// Attaching the child would make an element its own ancestor.
    #[error("adding {child:?} under {parent:?} would create a cycle")]
    CycleDetected {
        /// Requested parent.
        parent: ElementId,
        /// Requested child.
        child: ElementId,
    },

    /// No live element has this id.
    #[error("element not found: {0:?}")]
    NodeNotFound(ElementId),

    /// The script host was initialized twice.
    #[error("script host already initialized")]
    DoubleInit,

    /// The script host was used before initialization.
    #[error("script host not initialized")]
    NotInitialized,

    /// Configuration could not be loaded.
    #[error("config: {0}")]
    Config(String),

    /// File or stream failure.
    #[error("io: {0}")]
    Io(String),

    /// The rendering collaborator reported a failure.
    #[error("paint: {0}")]
    Paint(String),
}

impl From<ScriptError> for Error {
    fn from(e: ScriptError) -> Self {
        Self::Script(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_error_display_includes_position() {
        let err = ScriptError::new(ScriptErrorKind::Syntax, "unexpected symbol")
            .with_position(Some(3), None);
        assert_eq!(err.to_string(), "syntax: unexpected symbol (line 3)");

        let err = ScriptError::new(ScriptErrorKind::Timeout, "budget exhausted");
        assert_eq!(err.to_string(), "timeout: budget exhausted");
        assert_eq!(
            Error::from(err).to_string(),
            "script error: timeout: budget exhausted"
        );
    }
}
