use serde::{Deserialize, Serialize};

use super::defaults;

/// Token budget limits and defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Budget used when the caller does not supply one.
    pub default_budget: usize,
    /// Requested budgets below this are clamped up.
    pub min_budget: usize,
    /// Requested budgets above this are clamped down.
    pub max_budget: usize,
    /// Tokens held back for the prompt template and the model response.
    pub reserve_tokens: usize,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            default_budget: defaults::DEFAULT_BUDGET,
            min_budget: defaults::DEFAULT_MIN_BUDGET,
            max_budget: defaults::DEFAULT_MAX_BUDGET,
            reserve_tokens: defaults::DEFAULT_RESERVE_TOKENS,
        }
    }
}
