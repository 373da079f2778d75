use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SignalWeights;

use super::chunk::Chunk;

/// A chunk with its derived scores and original retrieval rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    /// Position in the retrieval output (0-based). Used only for tie-breaking.
    pub rank: usize,
    /// Weighted combination of relevance and secondary signals.
    pub composite_score: f64,
    /// `composite_score / token_count` for positive-cost chunks, 0 otherwise.
    pub value_per_token: f64,
}

/// Why a chunk was included in or excluded from the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionReason {
    /// Committed: the chunk fit the remaining budget.
    Included { value_per_token: f64 },
    /// Committed unconditionally: a zero-cost chunk never threatens the
    /// budget invariant.
    IncludedZeroCost,
    /// Skipped: the chunk did not fit the remaining budget at scan time.
    ExceedsRemaining { token_count: usize, remaining: usize },
    /// Skipped: the request had no budget at all.
    ZeroBudget,
}

impl SelectionReason {
    pub fn is_included(&self) -> bool {
        matches!(self, Self::Included { .. } | Self::IncludedZeroCost)
    }

    /// Stable label used for grouping in explanations and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Included { .. } => "fits_in_budget",
            Self::IncludedZeroCost => "zero_cost",
            Self::ExceedsRemaining { .. } => "budget_exceeded",
            Self::ZeroBudget => "zero_budget",
        }
    }
}

impl fmt::Display for SelectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Included { value_per_token } => write!(
                f,
                "included: value_per_token={value_per_token:.6}, fits remaining budget"
            ),
            Self::IncludedZeroCost => {
                write!(f, "included: zero token cost, does not consume budget")
            }
            Self::ExceedsRemaining {
                token_count,
                remaining,
            } => write!(
                f,
                "excluded: token_count ({token_count}) exceeds remaining budget ({remaining})"
            ),
            Self::ZeroBudget => write!(f, "excluded: zero budget"),
        }
    }
}

/// One per-chunk entry in the selection trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkDecision {
    pub chunk: ScoredChunk,
    pub reason: SelectionReason,
}

impl ChunkDecision {
    pub fn id(&self) -> &str {
        &self.chunk.chunk.id
    }
}

/// Aggregate statistics for one selection run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionStats {
    pub chunks_evaluated: usize,
    pub chunks_selected: usize,
    pub chunks_excluded: usize,
    /// Sum of token counts over included chunks. Never exceeds `budget`.
    pub total_tokens_used: usize,
    pub budget: usize,
    /// `total_tokens_used / budget`, 0 when the budget is 0.
    pub budget_used_fraction: f64,
}

/// Input to one selection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Candidates in retrieval rank order.
    pub chunks: Vec<Chunk>,
    /// Token budget. Signed so that caller-supplied values (e.g. from a UI
    /// control) can be rejected with a proper error when negative.
    pub budget: i64,
    pub weights: SignalWeights,
}

impl SelectionRequest {
    pub fn new(chunks: Vec<Chunk>, budget: i64) -> Self {
        Self {
            chunks,
            budget,
            weights: SignalWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }
}

/// Output of one selection run: the full auditable trace.
///
/// Every input chunk appears in exactly one of `included` / `excluded`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Committed chunks, in commit order.
    pub included: Vec<ChunkDecision>,
    /// Rejected chunks, each with an exclusion reason.
    pub excluded: Vec<ChunkDecision>,
    pub stats: SelectionStats,
}

impl SelectionResult {
    /// The included chunks in commit order, for prompt construction.
    pub fn included_chunks(&self) -> Vec<&Chunk> {
        self.included.iter().map(|d| &d.chunk.chunk).collect()
    }
}
