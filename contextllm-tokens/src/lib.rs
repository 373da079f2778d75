//! # contextllm-tokens
//!
//! Token counting for context selection. Counts are produced by the tiktoken
//! `cl100k_base` encoder with a blake3 content-hash cache; when the encoder
//! cannot be constructed the counter degrades to a chars-per-token heuristic.

use moka::sync::Cache;
use tiktoken_rs::{cl100k_base, CoreBPE};
use tracing::warn;

use contextllm_core::constants::CHARS_PER_TOKEN_ESTIMATE;
use contextllm_core::models::Chunk;

/// Maximum number of cached (content hash → token count) entries.
const CACHE_CAPACITY: u64 = 100_000;

/// Token counter with content-hash caching.
///
/// Cheap to share by reference; selection runs never mutate it beyond the
/// internal cache, which is safe for concurrent use.
pub struct TokenCounter {
    bpe: Option<CoreBPE>,
    cache: Cache<[u8; 32], usize>,
}

impl TokenCounter {
    pub fn new() -> Self {
        let bpe = match cl100k_base() {
            Ok(bpe) => Some(bpe),
            Err(e) => {
                warn!(error = %e, "tiktoken encoder unavailable, using heuristic estimates");
                None
            }
        };
        Self {
            bpe,
            cache: Cache::new(CACHE_CAPACITY),
        }
    }

    /// Count tokens without consulting the cache.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        match &self.bpe {
            Some(bpe) => bpe.encode_ordinary(text).len(),
            None => estimate_tokens(text),
        }
    }

    /// Count tokens, caching by blake3 content hash.
    pub fn count_cached(&self, text: &str) -> usize {
        let key = *blake3::hash(text.as_bytes()).as_bytes();
        if let Some(count) = self.cache.get(&key) {
            return count;
        }
        let count = self.count(text);
        self.cache.insert(key, count);
        count
    }

    /// Count tokens for a batch of texts.
    pub fn count_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<usize> {
        texts.iter().map(|t| self.count_cached(t.as_ref())).collect()
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Heuristic token estimate: one token per four characters.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN_ESTIMATE
}

/// Annotate every chunk with a freshly counted `token_count`.
pub fn add_token_counts(chunks: &mut [Chunk], counter: &TokenCounter) {
    for chunk in chunks {
        chunk.token_count = Some(counter.count_cached(&chunk.text) as i64);
    }
}

/// Count only the chunks the caller has not counted. Counts supplied by the
/// external tokenizer are trusted verbatim.
pub fn fill_missing_token_counts(chunks: &mut [Chunk], counter: &TokenCounter) {
    for chunk in chunks.iter_mut().filter(|c| c.token_count.is_none()) {
        chunk.token_count = Some(counter.count_cached(&chunk.text) as i64);
    }
}
