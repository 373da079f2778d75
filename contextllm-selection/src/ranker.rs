//! Deterministic value-per-token ordering with an explicit tie-break chain.

use std::cmp::Ordering;

use contextllm_core::models::ScoredChunk;
use contextllm_core::ContextResult;

/// Derive value-per-token and produce the packing order.
///
/// Zero-cost chunks sort first, by descending composite score: they never
/// consume budget, so they are always eligible. This is a policy decision,
/// not an accident of the sort. Positive-cost chunks follow by descending
/// value-per-token; ties resolve by higher composite score, then lower token
/// count, then earlier retrieval rank, which makes the order total and
/// independent of sort stability.
///
/// Fails with `MalformedCandidate` when a chunk has a negative or missing
/// token count.
pub fn rank(mut scored: Vec<ScoredChunk>) -> ContextResult<Vec<ScoredChunk>> {
    for entry in &mut scored {
        let cost = entry.chunk.cost()?;
        entry.value_per_token = if cost > 0 {
            entry.composite_score / cost as f64
        } else {
            0.0
        };
    }
    scored.sort_by(compare);
    Ok(scored)
}

// Costs are validated non-negative in `rank` before the sort runs.
fn cost_of(entry: &ScoredChunk) -> usize {
    entry.chunk.token_count.unwrap_or(0).max(0) as usize
}

fn compare(a: &ScoredChunk, b: &ScoredChunk) -> Ordering {
    match (cost_of(a) == 0, cost_of(b) == 0) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => b
            .composite_score
            .total_cmp(&a.composite_score)
            .then(a.rank.cmp(&b.rank)),
        (false, false) => b
            .value_per_token
            .total_cmp(&a.value_per_token)
            .then(b.composite_score.total_cmp(&a.composite_score))
            .then(cost_of(a).cmp(&cost_of(b)))
            .then(a.rank.cmp(&b.rank)),
    }
}
