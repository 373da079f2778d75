use std::collections::HashSet;

use contextllm_core::models::{Chunk, SelectionRequest};
use contextllm_selection::select_chunks;
use proptest::prelude::*;

fn arb_chunks(max_len: usize, max_tokens: i64) -> impl Strategy<Value = Vec<Chunk>> {
    prop::collection::vec(
        (
            0..=max_tokens,
            -1.0f64..=1.0,
            prop::option::of(0.0f64..=1.0),
        ),
        0..max_len,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (tokens, relevance, recency))| {
                let mut chunk = Chunk::new(format!("chunk-{i}"), "text", tokens, relevance);
                if let Some(r) = recency {
                    chunk = chunk.with_signal("recency", r);
                }
                chunk
            })
            .collect()
    })
}

proptest! {
    // The budget invariant: tokens used never exceed the budget.
    #[test]
    fn budget_is_never_exceeded(
        chunks in arb_chunks(30, 500),
        budget in 0i64..=1000,
    ) {
        let result = select_chunks(SelectionRequest::new(chunks, budget)).unwrap();
        prop_assert!(result.stats.total_tokens_used <= budget as usize);

        let included_sum: usize = result
            .included
            .iter()
            .map(|d| d.chunk.chunk.token_count.unwrap_or(0) as usize)
            .sum();
        prop_assert_eq!(result.stats.total_tokens_used, included_sum);
    }

    // Every candidate lands in exactly one of included/excluded.
    #[test]
    fn partition_is_complete(
        chunks in arb_chunks(30, 500),
        budget in 0i64..=1000,
    ) {
        let n = chunks.len();
        let result = select_chunks(SelectionRequest::new(chunks, budget)).unwrap();

        prop_assert_eq!(result.stats.chunks_evaluated, n);
        prop_assert_eq!(result.included.len() + result.excluded.len(), n);
        prop_assert_eq!(
            result.stats.chunks_selected + result.stats.chunks_excluded,
            n
        );

        let mut seen: HashSet<&str> = HashSet::new();
        for decision in result.included.iter().chain(result.excluded.iter()) {
            prop_assert!(seen.insert(decision.id()), "duplicated chunk {}", decision.id());
        }
    }

    // Identical input produces an identical trace.
    #[test]
    fn selection_is_deterministic(
        chunks in arb_chunks(20, 300),
        budget in 0i64..=800,
    ) {
        let request = SelectionRequest::new(chunks, budget);
        let first = select_chunks(request.clone()).unwrap();
        let second = select_chunks(request).unwrap();

        prop_assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    // Zero-cost chunks are included regardless of score or budget.
    #[test]
    fn zero_cost_chunks_are_always_included(
        chunks in arb_chunks(20, 50),
        budget in 0i64..=100,
    ) {
        let zero_cost_ids: Vec<String> = chunks
            .iter()
            .filter(|c| c.token_count == Some(0))
            .map(|c| c.id.clone())
            .collect();

        let result = select_chunks(SelectionRequest::new(chunks, budget)).unwrap();
        let included: HashSet<&str> = result.included.iter().map(|d| d.id()).collect();
        for id in &zero_cost_ids {
            prop_assert!(included.contains(id.as_str()), "zero-cost {} excluded", id);
        }
    }

    // Growing the budget never shrinks the tokens delivered.
    #[test]
    fn tokens_used_grow_with_budget(
        chunks in arb_chunks(20, 200),
        budget in 0i64..=500,
        extra in 0i64..=500,
    ) {
        let small = select_chunks(SelectionRequest::new(chunks.clone(), budget)).unwrap();
        let large = select_chunks(SelectionRequest::new(chunks, budget + extra)).unwrap();
        prop_assert!(
            large.stats.total_tokens_used >= small.stats.total_tokens_used,
            "tokens used shrank: {} -> {}",
            small.stats.total_tokens_used,
            large.stats.total_tokens_used
        );
    }

    // Exclusion reasons always carry the exact trace wording.
    #[test]
    fn trace_strings_are_well_formed(
        chunks in arb_chunks(20, 200),
        budget in 0i64..=300,
    ) {
        let result = select_chunks(SelectionRequest::new(chunks, budget)).unwrap();
        for decision in &result.included {
            prop_assert!(decision.reason.to_string().starts_with("included: "));
        }
        for decision in &result.excluded {
            prop_assert!(decision.reason.to_string().starts_with("excluded: "));
        }
    }
}
