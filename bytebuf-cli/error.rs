//! Error types for harness operations.

use std::io;

use thiserror::Error;

/// Main error type for harness operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Zero timed runs requested
    #[error("The number of iterations must be at least 1")]
    InvalidIterations,

    /// Zero scale factor requested
    #[error("The scale factor must be at least 1")]
    InvalidScale,

    /// Scenario name not recognized
    #[error("{0}: Unknown scenario")]
    UnknownScenario(String),

    /// Buffer operation failed while running a workload
    #[error("buffer operation failed: {0}")]
    Buffer(#[from] bytebuf_core::Error),

    /// Writing the report failed
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Specialized `Result` type for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidIterations | Error::InvalidScale | Error::UnknownScenario(_) => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            Error::Buffer(bytebuf_core::Error::AllocationFailed { .. }) => {
                io::Error::new(io::ErrorKind::OutOfMemory, err)
            }
            Error::Buffer(_) => io::Error::other(err),
            // Preserve the original error kind
            Error::Io(source) => source,
        }
    }
}

/// Formats an error message for stderr, respecting `-q/-qq`.
///
/// # Parameters
///
/// - `program`: Program name prefix to use in error output.
/// - `quiet`: Quiet level (as counted by `-q` occurrences).
/// - `err`: The I/O error returned by the harness.
///
/// # Returns
///
/// Returns `None` when the message should be suppressed by `quiet`,
/// otherwise a single-line message suitable for stderr.
pub fn format_error_for_stderr(program: &str, quiet: u8, err: &io::Error) -> Option<String> {
    if quiet >= 2 {
        return None;
    }

    Some(format!("{program}: {err}"))
}
