//! Error types for the sortdiff core.

/// Errors surfaced while pulling lines from a source.
///
/// The merge engine itself recognizes no error kinds of its own:
/// exhaustion of a source is normal termination signaling, not failure.
/// Everything here originates in a collaborator supplying lines.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// I/O failure while reading from a file- or stream-backed source.
    /// Invalid UTF-8 surfaces here as an `InvalidData` error.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A failure reported by a custom line source.
    #[error("source error: {0}")]
    Source(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
