//! Error types for STL encoding.

use thiserror::Error;

/// Result type alias for STL operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur while writing STL output.
///
/// Encoding into an in-memory buffer is infallible; errors only arise
/// from the underlying writer when streaming to a file or socket.
#[derive(Debug, Error)]
pub enum StlError {
    /// I/O error from the destination writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = StlError::from(io_err);
        assert!(format!("{err}").contains("pipe closed"));
    }
}
