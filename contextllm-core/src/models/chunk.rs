use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::SelectionError;

/// A retrieved text fragment under consideration for prompt inclusion.
///
/// Token counts and relevance scores are supplied by external collaborators
/// (tokenizer and retrieval); selection trusts them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Opaque identifier, stable within a single request.
    pub id: String,
    /// Fragment content. Opaque to selection; used only for output.
    pub text: String,
    /// Document or file the fragment came from, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Cost of including this fragment verbatim, as reported by the external
    /// tokenizer. `None` until counted.
    #[serde(default)]
    pub token_count: Option<i64>,
    /// Relevance score from retrieval, in [-1.0, 1.0].
    pub relevance_score: f64,
    /// Normalized secondary signals in [0.0, 1.0], keyed by name
    /// (e.g. "recency", "importance"). Absent signals are neutral.
    /// Ordered map: composite scores sum signals in key order, keeping the
    /// result bit-identical across runs.
    #[serde(default)]
    pub signals: BTreeMap<String, f64>,
}

impl Chunk {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        token_count: i64,
        relevance_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source: None,
            token_count: Some(token_count),
            relevance_score,
            signals: BTreeMap::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_signal(mut self, name: impl Into<String>, value: f64) -> Self {
        self.signals.insert(name.into(), value);
        self
    }

    /// Validated token cost of this chunk.
    pub fn cost(&self) -> Result<usize, SelectionError> {
        match self.token_count {
            Some(t) if t >= 0 => Ok(t as usize),
            Some(t) => Err(SelectionError::MalformedCandidate {
                id: self.id.clone(),
                reason: format!("negative token_count {t}"),
            }),
            None => Err(SelectionError::MalformedCandidate {
                id: self.id.clone(),
                reason: "missing token_count".to_string(),
            }),
        }
    }
}
