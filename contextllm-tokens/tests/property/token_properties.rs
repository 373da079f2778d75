use contextllm_tokens::{estimate_tokens, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn count_is_bounded(s in ".{0,200}") {
        let counter = TokenCounter::default();
        let count = counter.count(&s);
        // Token count should be reasonable (not astronomical).
        prop_assert!(count <= s.len() * 2 + 10);
    }

    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::default();
        let uncached = counter.count(&s);
        let cached = counter.count_cached(&s);
        prop_assert_eq!(uncached, cached);
    }

    #[test]
    fn repeated_cached_counts_agree(s in ".{0,200}") {
        let counter = TokenCounter::default();
        let first = counter.count_cached(&s);
        let second = counter.count_cached(&s);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn subadditivity(a in ".{0,100}", b in ".{0,100}") {
        let counter = TokenCounter::default();
        let combined = format!("{}{}", a, b);
        let count_a = counter.count(&a);
        let count_b = counter.count(&b);
        let count_combined = counter.count(&combined);
        prop_assert!(
            count_combined <= count_a + count_b + 1,
            "subadditivity: {} <= {} + {} + 1",
            count_combined, count_a, count_b
        );
    }

    #[test]
    fn estimate_scales_with_length(s in "[a-z ]{0,400}") {
        let estimate = estimate_tokens(&s);
        prop_assert_eq!(estimate, s.chars().count() / 4);
    }
}
