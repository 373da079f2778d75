//! Skip-continue greedy packing over a ranked candidate order.

use contextllm_core::errors::SelectionError;
use contextllm_core::models::{
    ChunkDecision, ScoredChunk, SelectionReason, SelectionResult, SelectionStats,
};
use contextllm_core::ContextResult;

/// Walk the ranked order once, committing every chunk that fits the
/// remaining budget.
///
/// A chunk that does not fit is excluded and the walk continues: a later,
/// cheaper chunk may still fit what remains. This is a deterministic
/// heuristic for the 0/1 knapsack problem, chosen for explainability and a
/// single linear pass, never an exact solver.
///
/// Zero-cost chunks are committed unconditionally and consume no budget.
/// Fails with `InvalidBudget` only when `budget < 0`.
pub fn pack(ordered: Vec<ScoredChunk>, budget: i64) -> ContextResult<SelectionResult> {
    if budget < 0 {
        return Err(SelectionError::InvalidBudget { budget }.into());
    }
    let budget = budget as usize;

    let chunks_evaluated = ordered.len();
    let mut remaining = budget;
    let mut included: Vec<ChunkDecision> = Vec::new();
    let mut excluded: Vec<ChunkDecision> = Vec::new();

    for entry in ordered {
        let cost = entry.chunk.cost()?;
        if cost == 0 {
            included.push(ChunkDecision {
                chunk: entry,
                reason: SelectionReason::IncludedZeroCost,
            });
        } else if budget == 0 {
            excluded.push(ChunkDecision {
                chunk: entry,
                reason: SelectionReason::ZeroBudget,
            });
        } else if cost <= remaining {
            remaining -= cost;
            let reason = SelectionReason::Included {
                value_per_token: entry.value_per_token,
            };
            included.push(ChunkDecision {
                chunk: entry,
                reason,
            });
        } else {
            excluded.push(ChunkDecision {
                reason: SelectionReason::ExceedsRemaining {
                    token_count: cost,
                    remaining,
                },
                chunk: entry,
            });
        }
    }

    let total_tokens_used = budget - remaining;
    let stats = SelectionStats {
        chunks_evaluated,
        chunks_selected: included.len(),
        chunks_excluded: excluded.len(),
        total_tokens_used,
        budget,
        budget_used_fraction: if budget == 0 {
            0.0
        } else {
            total_tokens_used as f64 / budget as f64
        },
    };

    Ok(SelectionResult {
        included,
        excluded,
        stats,
    })
}
