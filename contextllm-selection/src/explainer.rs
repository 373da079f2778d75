//! Human-readable explanations of selection decisions.

use std::collections::BTreeMap;

use contextllm_core::constants::SELECTION_ALGORITHM;
use contextllm_core::models::{ChunkDecision, SelectionResult};

/// Number of included chunks detailed by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Render a selection result as a decision summary.
///
/// Works entirely from the recorded trace; the algorithm is never re-run.
pub fn explain(result: &SelectionResult, top_n: usize) -> String {
    let stats = &result.stats;
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(60));
    lines.push("SELECTION DECISION SUMMARY".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());
    lines.push(format!("Algorithm: {SELECTION_ALGORITHM}"));
    lines.push(format!("Chunks evaluated: {}", stats.chunks_evaluated));
    lines.push(format!("Chunks selected: {}", stats.chunks_selected));
    lines.push(format!("Chunks excluded: {}", stats.chunks_excluded));
    lines.push(String::new());
    lines.push("Budget:".to_string());
    lines.push(format!("  Total budget: {} tokens", stats.budget));
    lines.push(format!("  Tokens used: {}", stats.total_tokens_used));
    lines.push(format!(
        "  Budget utilization: {:.1}%",
        stats.budget_used_fraction * 100.0
    ));

    if !result.included.is_empty() {
        let shown = top_n.min(result.included.len());
        lines.push(String::new());
        lines.push(format!("SELECTED CHUNKS (top {shown}):"));
        for (i, decision) in result.included.iter().take(top_n).enumerate() {
            let scored = &decision.chunk;
            lines.push(format!(
                "{}. {} (value_per_token={:.4}, relevance={:.3}, tokens={})",
                i + 1,
                decision.id(),
                scored.value_per_token,
                scored.chunk.relevance_score,
                scored.chunk.token_count.unwrap_or(0),
            ));
            lines.push(format!("   {}", decision.reason));
        }
        if result.included.len() > top_n {
            lines.push(format!(
                "... and {} more chunks",
                result.included.len() - top_n
            ));
        }
    }

    if !result.excluded.is_empty() {
        lines.push(String::new());
        lines.push("EXCLUDED CHUNKS:".to_string());
        let mut by_kind: BTreeMap<&'static str, Vec<&ChunkDecision>> = BTreeMap::new();
        for decision in &result.excluded {
            by_kind.entry(decision.reason.kind()).or_default().push(decision);
        }
        for (kind, group) in by_kind {
            lines.push(format!("  {kind}: {} chunks", group.len()));
            if let Some(example) = group.first() {
                lines.push(format!("    example: {} ({})", example.id(), example.reason));
            }
        }
    }

    lines.push("=".repeat(60));
    lines.join("\n")
}
