//! # contextllm-selection
//!
//! The budget-constrained chunk selector: given candidates already scored for
//! relevance and counted for tokens, deterministically choose the subset that
//! maximizes delivered value per token under a budget, with a full
//! per-candidate inclusion/exclusion trace.
//!
//! Three stages, pure computation throughout:
//! scorer (composite score) → ranker (value-per-token total order) →
//! packer (skip-continue greedy walk).

pub mod budget;
pub mod engine;
pub mod explainer;
pub mod packer;
pub mod ranker;
pub mod scorer;

pub use budget::{validate_budget, BudgetManager};
pub use engine::{select_chunks, SelectionEngine};
