//! # contextllm-core
//!
//! Foundation crate for the contextllm context selection system.
//! Defines the types, errors, config, and constants shared by every
//! other crate in the workspace.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ContextConfig;
pub use errors::{ContextError, ContextResult, SelectionError};
pub use models::{
    Chunk, ChunkDecision, ScoredChunk, SelectionReason, SelectionRequest, SelectionResult,
    SelectionStats,
};
