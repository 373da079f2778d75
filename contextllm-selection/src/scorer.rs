//! Composite scorer: relevance plus weighted secondary signals.

use contextllm_core::config::SignalWeights;
use contextllm_core::constants::{
    RELEVANCE_SCORE_MAX, RELEVANCE_SCORE_MIN, SIGNAL_MAX, SIGNAL_MIN,
};
use contextllm_core::errors::SelectionError;
use contextllm_core::models::{Chunk, ScoredChunk};
use contextllm_core::ContextResult;

/// Composite score for one chunk: a pure function of the chunk and the
/// weights. A signal the chunk does not carry contributes 0.
pub fn composite_score(chunk: &Chunk, weights: &SignalWeights) -> f64 {
    let mut score = weights.relevance_weight * chunk.relevance_score;
    for (name, value) in &chunk.signals {
        score += weights.signal_weight(name) * value;
    }
    score
}

/// Score all chunks, preserving the retrieval order in the `rank` field.
///
/// Fails with `InvalidWeight` when any configured weight is negative and with
/// `MalformedCandidate` when a score lies outside its documented range.
pub fn score(chunks: Vec<Chunk>, weights: &SignalWeights) -> ContextResult<Vec<ScoredChunk>> {
    weights.validate()?;

    let mut scored = Vec::with_capacity(chunks.len());
    for (rank, chunk) in chunks.into_iter().enumerate() {
        validate_score_ranges(&chunk)?;
        let composite = composite_score(&chunk, weights);
        scored.push(ScoredChunk {
            rank,
            composite_score: composite,
            // Derived by the ranker once token costs are validated.
            value_per_token: 0.0,
            chunk,
        });
    }
    Ok(scored)
}

fn validate_score_ranges(chunk: &Chunk) -> Result<(), SelectionError> {
    if !(RELEVANCE_SCORE_MIN..=RELEVANCE_SCORE_MAX).contains(&chunk.relevance_score) {
        return Err(SelectionError::MalformedCandidate {
            id: chunk.id.clone(),
            reason: format!(
                "relevance_score {} outside [{RELEVANCE_SCORE_MIN}, {RELEVANCE_SCORE_MAX}]",
                chunk.relevance_score
            ),
        });
    }
    for (name, value) in &chunk.signals {
        if !(SIGNAL_MIN..=SIGNAL_MAX).contains(value) {
            return Err(SelectionError::MalformedCandidate {
                id: chunk.id.clone(),
                reason: format!("signal {name}={value} outside [{SIGNAL_MIN}, {SIGNAL_MAX}]"),
            });
        }
    }
    Ok(())
}
