/// Contextllm system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the retrieval relevance score range (cosine similarity).
pub const RELEVANCE_SCORE_MIN: f64 = -1.0;

/// Upper bound of the retrieval relevance score range.
pub const RELEVANCE_SCORE_MAX: f64 = 1.0;

/// Lower bound for normalized secondary signals.
pub const SIGNAL_MIN: f64 = 0.0;

/// Upper bound for normalized secondary signals.
pub const SIGNAL_MAX: f64 = 1.0;

/// Characters-per-token ratio used when no encoder is available.
pub const CHARS_PER_TOKEN_ESTIMATE: usize = 4;

/// Name of the selection algorithm recorded in explanations and logs.
pub const SELECTION_ALGORITHM: &str = "greedy_value_per_token";
