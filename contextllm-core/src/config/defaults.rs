//! Default values for all configuration sections.

pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 1.0;
pub const DEFAULT_RECENCY_WEIGHT: f64 = 0.0;
pub const DEFAULT_IMPORTANCE_WEIGHT: f64 = 0.0;

pub const DEFAULT_BUDGET: usize = 2000;
pub const DEFAULT_MIN_BUDGET: usize = 500;
pub const DEFAULT_MAX_BUDGET: usize = 8000;
pub const DEFAULT_RESERVE_TOKENS: usize = 200;

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that answers questions based on the provided context.";
