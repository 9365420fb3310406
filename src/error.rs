//! Error types for buildprobe.
//!
//! Error codes are organized by category:
//!
//! - **BPR-E900 to BPR-E999**: I/O and internal errors
//!
//! The only fallible operation in this crate is writing the greeting line to
//! standard output; everything else is decided at compile time.

use thiserror::Error;

/// Main error type for buildprobe operations.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// I/O error occurred while writing the greeting line.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ProbeError {
    /// Returns the error code for this error.
    pub const fn error_code(&self) -> &'static str {
        match self {
            ProbeError::IoError(_) => "BPR-E901",
        }
    }

    /// Returns remediation hints for this error, if available.
    pub const fn remediation(&self) -> Option<&'static str> {
        match self {
            ProbeError::IoError(_) => {
                Some("Check that standard output is writable (not closed or redirected to a full device).")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProbeError;

    #[test]
    fn io_error_carries_code_and_remediation() {
        let err = ProbeError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.error_code(), "BPR-E901");
        assert!(err.remediation().is_some());
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
