use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::SelectionError;

/// Weights for the composite chunk score.
///
/// Weights are non-negative and are not required to sum to 1. An all-zero
/// configuration is valid: every chunk then scores 0 and ordering falls
/// through to the token-count and retrieval-rank tie-breaks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    /// Weight applied to the retrieval relevance score.
    pub relevance_weight: f64,
    /// Weight applied to the normalized "recency" signal.
    pub recency_weight: f64,
    /// Weight applied to the normalized "importance" signal.
    pub importance_weight: f64,
    /// Weights for any additional named signals.
    #[serde(flatten)]
    pub extra_weights: HashMap<String, f64>,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            relevance_weight: defaults::DEFAULT_RELEVANCE_WEIGHT,
            recency_weight: defaults::DEFAULT_RECENCY_WEIGHT,
            importance_weight: defaults::DEFAULT_IMPORTANCE_WEIGHT,
            extra_weights: HashMap::new(),
        }
    }
}

impl SignalWeights {
    /// Weight configured for a named secondary signal. Unconfigured signals
    /// have weight 0 and therefore never affect the composite score.
    pub fn signal_weight(&self, name: &str) -> f64 {
        match name {
            "recency" => self.recency_weight,
            "importance" => self.importance_weight,
            other => self.extra_weights.get(other).copied().unwrap_or(0.0),
        }
    }

    /// All configured (name, weight) pairs, including the relevance weight.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        [
            ("relevance", self.relevance_weight),
            ("recency", self.recency_weight),
            ("importance", self.importance_weight),
        ]
        .into_iter()
        .chain(self.extra_weights.iter().map(|(k, v)| (k.as_str(), *v)))
    }

    /// Reject any negative configured weight.
    pub fn validate(&self) -> Result<(), SelectionError> {
        for (name, value) in self.iter() {
            if value < 0.0 || value.is_nan() {
                return Err(SelectionError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
