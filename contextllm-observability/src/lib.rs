//! # contextllm-observability
//!
//! Inspection surface for selection runs: a bounded in-memory log of
//! per-request statistics, plus tracing subscriber setup. Selection results
//! are recorded as-is; the algorithm is never re-run here.

pub mod logging;
pub mod selection_log;

pub use logging::init_logging;
pub use selection_log::{SelectionLog, SelectionLogEntry};
