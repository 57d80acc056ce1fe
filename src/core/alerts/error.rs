use std::io;

use thiserror::Error;

/// Failures reported by a view adapter.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("alert container is not mounted")]
    Unmounted,
    #[error("alert container already holds {0} nodes")]
    NotEmpty(usize),
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Failures surfaced by the alert feed. None of them are recoverable by the feed itself.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("view precondition violated: {0}")]
    PreconditionViolation(#[from] ViewError),
}
