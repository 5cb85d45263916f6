//! Error types for controller and store operations.

use tasklane_core::TaskId;
use thiserror::Error;

/// Result alias for controller entry points.
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors surfaced by [`crate::Controller`].
///
/// The controller does not interpret collaborator failures; it only carries them.
#[derive(Error, Debug)]
pub enum ControllerError {
    /// Backing store returned an error.
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// Errors raised by the bundled store implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No task carries the requested id.
    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Task file could not be parsed or serialized.
    #[error("Task file error: {0}")]
    Json(#[from] serde_json::Error),

    /// Blocking worker panicked or was cancelled.
    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}
