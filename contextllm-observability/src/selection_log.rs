//! Selection performance logging: query, latency, counts, budget utilization.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use contextllm_core::models::SelectionResult;

/// A single selection log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionLogEntry {
    pub query: String,
    pub latency: Duration,
    pub chunks_evaluated: usize,
    pub chunks_selected: usize,
    pub chunks_excluded: usize,
    pub tokens_used: usize,
    pub budget: usize,
    pub timestamp_epoch_ms: i64,
}

impl SelectionLogEntry {
    /// Build an entry from a finished selection, timestamped now.
    pub fn from_result(
        query: impl Into<String>,
        latency: Duration,
        result: &SelectionResult,
    ) -> Self {
        let stats = &result.stats;
        Self {
            query: query.into(),
            latency,
            chunks_evaluated: stats.chunks_evaluated,
            chunks_selected: stats.chunks_selected,
            chunks_excluded: stats.chunks_excluded,
            tokens_used: stats.total_tokens_used,
            budget: stats.budget,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Append-only log of selection runs with ring-buffer retention.
#[derive(Debug, Clone)]
pub struct SelectionLog {
    entries: Vec<SelectionLogEntry>,
    /// Maximum entries to retain.
    max_entries: usize,
}

impl SelectionLog {
    pub fn new() -> Self {
        Self::with_capacity(50_000)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record one selection run.
    pub fn record(&mut self, entry: SelectionLogEntry) {
        tracing::debug!(
            event = "selection_logged",
            query = %entry.query,
            latency_ms = entry.latency.as_millis() as u64,
            evaluated = entry.chunks_evaluated,
            selected = entry.chunks_selected,
            tokens_used = entry.tokens_used,
            budget = entry.budget,
            "selection logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            let overflow = self.entries.len() - self.max_entries;
            self.entries.drain(0..overflow);
        }
    }

    /// Convenience wrapper over [`SelectionLogEntry::from_result`].
    pub fn record_result(
        &mut self,
        query: impl Into<String>,
        latency: Duration,
        result: &SelectionResult,
    ) {
        self.record(SelectionLogEntry::from_result(query, latency, result));
    }

    pub fn entries(&self) -> &[SelectionLogEntry] {
        &self.entries
    }

    /// The most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> &[SelectionLogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SelectionLog {
    fn default() -> Self {
        Self::new()
    }
}
