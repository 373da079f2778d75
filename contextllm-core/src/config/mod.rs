pub mod budget_config;
pub mod defaults;
pub mod prompt_config;
pub mod weights;

pub use budget_config::BudgetConfig;
pub use prompt_config::PromptConfig;
pub use weights::SignalWeights;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ContextError, ContextResult};

/// Top-level configuration for the contextllm pipeline.
///
/// Configuration is passed explicitly into each call rather than read from
/// ambient process state, so the selection pipeline stays pure and
/// independently testable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub weights: SignalWeights,
    pub budget: BudgetConfig,
    pub prompt: PromptConfig,
}

impl ContextConfig {
    /// Load configuration from a TOML file. Absent keys fall back to defaults.
    pub fn load(path: &Path) -> ContextResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ContextError::Config {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string and validate the weights.
    pub fn from_toml(raw: &str) -> ContextResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| ContextError::Config {
            reason: format!("failed to parse config: {e}"),
        })?;
        config.weights.validate()?;
        Ok(config)
    }
}
