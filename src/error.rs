//! Error types for the snapshot shell.
//!
//! The numeric core has no failure paths: `observe` and the counter appends
//! cannot fail, and undefined probabilities surface as NaN values rather than
//! errors. Only encoding and decoding snapshots can go wrong.

use thiserror::Error;

/// Errors from writing or reading an event-space snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Filesystem failure while saving or loading a snapshot.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unencodable snapshot data.
    #[error("snapshot encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
