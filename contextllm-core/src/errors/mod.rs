pub mod selection_error;

pub use selection_error::SelectionError;

/// Top-level error type for the contextllm workspace.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used across the workspace.
pub type ContextResult<T> = Result<T, ContextError>;
