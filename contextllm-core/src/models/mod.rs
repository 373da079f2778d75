pub mod chunk;
pub mod selection;

pub use chunk::Chunk;
pub use selection::{
    ChunkDecision, ScoredChunk, SelectionReason, SelectionRequest, SelectionResult, SelectionStats,
};
