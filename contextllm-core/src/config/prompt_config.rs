use serde::{Deserialize, Serialize};

use super::defaults;

/// Prompt construction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// System prompt prepended to every generation request.
    pub system_prompt: String,
    /// Append a short summary of how many context chunks were provided.
    pub include_context_metadata: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system_prompt: defaults::DEFAULT_SYSTEM_PROMPT.to_string(),
            include_context_metadata: false,
        }
    }
}
