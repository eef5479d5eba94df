//! Error types shared by the command builder and the prompt operations.

use thiserror::Error;

/// Result type for gum operations
pub type GumResult<T> = Result<T, GumError>;

/// Errors that can occur while building, running or decoding an invocation.
///
/// # Example
///
/// ```
/// use gum::GumError;
///
/// let error = GumError::command_failed("gum choose", 130, "");
/// assert!(error.to_string().contains("130"));
/// ```
#[derive(Debug, Error)]
pub enum GumError {
    /// The process exited with a non-zero status while strict checking was on.
    #[error("command `{command}` failed with exit code {code}: {stderr}")]
    CommandFailed {
        /// Rendered command line.
        command: String,
        /// Exit code reported by the process (-1 when killed by a signal).
        code: i32,
        /// Captured standard error, empty when stderr was left on the terminal.
        stderr: String,
    },

    /// The program could not be started at all.
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Piping data in or out of a running child failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned text did not match any candidate's display string.
    #[error("selection not found among candidates: {text:?}")]
    SelectionNotFound {
        /// The unmatched output line.
        text: String,
    },

    /// A single-selection prompt returned no output.
    #[error("no selection was made")]
    NoSelection,

    /// An awaited invocation ran past its deadline.
    #[error("command `{command}` timed out after {elapsed:?}")]
    TimedOut {
        /// Rendered command line.
        command: String,
        /// Timeout that elapsed.
        elapsed: std::time::Duration,
    },
}

impl GumError {
    /// Create a CommandFailed error.
    pub fn command_failed(
        command: impl Into<String>,
        code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Create a Spawn error for the given program.
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Create a SelectionNotFound error for the given output line.
    pub fn selection_not_found(text: impl Into<String>) -> Self {
        Self::SelectionNotFound { text: text.into() }
    }

    /// Exit code carried by a CommandFailed error.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
