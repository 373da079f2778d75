//! Budget validation, clamping, and reserve accounting.

use contextllm_core::config::BudgetConfig;
use contextllm_core::errors::SelectionError;
use contextllm_core::ContextResult;
use tracing::warn;

/// Validate a requested budget and clamp it to the configured range.
pub fn validate_budget(requested: i64, config: &BudgetConfig) -> ContextResult<usize> {
    if requested < 0 {
        return Err(SelectionError::InvalidBudget { budget: requested }.into());
    }
    let requested = requested as usize;
    if requested < config.min_budget {
        warn!(
            requested,
            min = config.min_budget,
            "budget below minimum, clamping"
        );
        Ok(config.min_budget)
    } else if requested > config.max_budget {
        warn!(
            requested,
            max = config.max_budget,
            "budget above maximum, clamping"
        );
        Ok(config.max_budget)
    } else {
        Ok(requested)
    }
}

/// Total, reserved, and available tokens for one selection run.
///
/// The reserve holds back room for the prompt template and the model
/// response; only the remainder is available for context chunks.
#[derive(Debug, Clone)]
pub struct BudgetManager {
    total: usize,
    reserve: usize,
    available: usize,
}

impl BudgetManager {
    /// Build a manager from a requested budget, clamping to the configured
    /// range. `reserve` falls back to the configured reserve when `None`.
    pub fn new(
        requested: i64,
        reserve: Option<usize>,
        config: &BudgetConfig,
    ) -> ContextResult<Self> {
        let total = validate_budget(requested, config)?;
        let reserve = reserve.unwrap_or(config.reserve_tokens);
        if reserve >= total {
            return Err(SelectionError::ReserveExceedsBudget {
                reserve,
                budget: total,
            }
            .into());
        }
        Ok(Self {
            total,
            reserve,
            available: total - reserve,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn reserve(&self) -> usize {
        self.reserve
    }

    pub fn available(&self) -> usize {
        self.available
    }

    pub fn can_fit(&self, token_count: usize) -> bool {
        token_count <= self.available
    }
}
