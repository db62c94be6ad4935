//! Unified error types for acbrip
//!
//! Error strategy:
//! - Per-job errors (decode, encode, scratch handling): Recoverable, mark
//!   the job failed and continue the batch
//! - Setup errors (missing directories, unresolvable executables, malformed
//!   quality string): Fatal, abort before any processing
//!
//! All errors include actionable suggestions where possible.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for acbrip operations
#[derive(Debug, Error)]
pub enum AcbripError {
    // =========================================================================
    // Recoverable errors - mark job failed, continue batch
    // =========================================================================
    #[error("Decoder failed for '{path}': {reason}")]
    DecodeFailed { path: PathBuf, reason: String },

    #[error("No waveform files produced for '{0}'\n  Tip: the container may be empty or use a format vgmstream cannot read")]
    NoWaveforms(PathBuf),

    #[error("Encoder failed for '{path}': {reason}")]
    EncodeFailed { path: PathBuf, reason: String },

    #[error("Cannot create output directory '{path}': {reason}\n  Tip: Check write permissions for the output tree")]
    OutputDirError { path: PathBuf, reason: String },

    #[error("Scratch directory error for '{path}': {reason}")]
    ScratchError { path: PathBuf, reason: String },

    // =========================================================================
    // Fatal errors - abort before any processing
    // =========================================================================
    #[error("Source directory not found: '{0}'\n  Tip: Check the path exists and is accessible")]
    SourceNotFound(PathBuf),

    #[error("Could not find {tool} executable\n  Tip: Ensure it is on your PATH or pass its location explicitly")]
    ToolNotFound { tool: String },

    #[error("Invalid quality string '{0}'\n  Tip: Quote the whole value, e.g. --lame-quality '-V 2'")]
    InvalidQuality(String),

    #[error("Cannot create output root '{path}': {reason}")]
    OutputRootError { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for acbrip operations
pub type Result<T> = std::result::Result<T, AcbripError>;

impl AcbripError {
    /// Returns true if this error is recoverable (mark job failed, continue batch)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AcbripError::DecodeFailed { .. }
                | AcbripError::NoWaveforms(_)
                | AcbripError::EncodeFailed { .. }
                | AcbripError::OutputDirError { .. }
                | AcbripError::ScratchError { .. }
        )
    }

    /// Create a decode error with context about the issue
    pub fn decode_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AcbripError::DecodeFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an encode error with context about the issue
    pub fn encode_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        AcbripError::EncodeFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a scratch directory error from an IO failure
    pub fn scratch_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        AcbripError::ScratchError {
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn job_errors_are_recoverable() {
        let err = AcbripError::decode_failed(Path::new("/a.acb"), "exit code 2");
        assert!(err.is_recoverable());

        let err = AcbripError::NoWaveforms(PathBuf::from("/a.acb"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn setup_errors_are_fatal() {
        let err = AcbripError::SourceNotFound(PathBuf::from("/missing"));
        assert!(!err.is_recoverable());

        let err = AcbripError::ToolNotFound {
            tool: "lame".to_string(),
        };
        assert!(!err.is_recoverable());

        let err = AcbripError::InvalidQuality("-V '2".to_string());
        assert!(!err.is_recoverable());
    }
}
