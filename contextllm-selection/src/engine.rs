//! SelectionEngine: orchestrates the score → rank → pack pipeline.

use contextllm_core::config::ContextConfig;
use contextllm_core::models::{Chunk, SelectionRequest, SelectionResult};
use contextllm_core::ContextResult;
use contextllm_tokens::TokenCounter;
use tracing::{debug, info};

use crate::budget::BudgetManager;
use crate::{packer, ranker, scorer};

/// Run the pure selection pipeline on a fully specified request.
///
/// Token counts and scores are trusted verbatim; no clamping, no reserve.
/// Safe to call concurrently — there is no shared state.
pub fn select_chunks(request: SelectionRequest) -> ContextResult<SelectionResult> {
    let SelectionRequest {
        chunks,
        budget,
        weights,
    } = request;
    let scored = scorer::score(chunks, &weights)?;
    let ordered = ranker::rank(scored)?;
    packer::pack(ordered, budget)
}

/// Service-level entry point around [`select_chunks`].
///
/// Clamps the requested budget to the configured range, holds back the
/// reserve, and counts tokens for any chunk the caller did not count.
pub struct SelectionEngine {
    config: ContextConfig,
    counter: TokenCounter,
}

impl SelectionEngine {
    pub fn new(config: ContextConfig) -> Self {
        Self {
            config,
            counter: TokenCounter::new(),
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    /// Select chunks under the configured budget, or `budget` when supplied.
    pub fn select(
        &self,
        mut chunks: Vec<Chunk>,
        budget: Option<i64>,
    ) -> ContextResult<SelectionResult> {
        let requested = budget.unwrap_or(self.config.budget.default_budget as i64);
        let manager = BudgetManager::new(requested, None, &self.config.budget)?;

        contextllm_tokens::fill_missing_token_counts(&mut chunks, &self.counter);

        debug!(
            chunks = chunks.len(),
            total = manager.total(),
            reserve = manager.reserve(),
            available = manager.available(),
            "starting selection"
        );

        let request = SelectionRequest {
            chunks,
            budget: manager.available() as i64,
            weights: self.config.weights.clone(),
        };
        let result = select_chunks(request)?;

        info!(
            evaluated = result.stats.chunks_evaluated,
            selected = result.stats.chunks_selected,
            excluded = result.stats.chunks_excluded,
            tokens_used = result.stats.total_tokens_used,
            budget = result.stats.budget,
            "selection complete"
        );
        Ok(result)
    }
}
