/// Selection pipeline errors.
///
/// All variants are detected synchronously before or during the single
/// packing pass; none of them corrupts state for subsequent requests.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("invalid budget {budget}: budget must be non-negative")]
    InvalidBudget { budget: i64 },

    #[error("reserve tokens ({reserve}) exceed or equal total budget ({budget})")]
    ReserveExceedsBudget { reserve: usize, budget: usize },

    #[error("malformed candidate {id}: {reason}")]
    MalformedCandidate { id: String, reason: String },

    #[error("invalid weight {name}: {value} (weights must be non-negative)")]
    InvalidWeight { name: String, value: f64 },
}
