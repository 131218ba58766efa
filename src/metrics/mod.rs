//! Outcome classification and concurrent aggregation of per-request results.
mod aggregator;
mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{OutcomeAggregator, OutcomeRecorder};
pub use types::{Outcome, RunResult, STATUS_TIMEOUT, StatusSummary};
