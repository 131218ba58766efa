use thiserror::Error;

/// Failures of the dispatch machinery itself. Individual requests never
/// produce one of these; they are folded into an outcome code instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Concurrency slot pool closed while dispatching: {source}")]
    SlotPoolClosed {
        #[source]
        source: tokio::sync::AcquireError,
    },
    #[error("Outcome collector closed before status {code} could be recorded.")]
    CollectorClosed { code: u16 },
    #[error("Recorded {recorded} outcomes for {expected} requests.")]
    OutcomeCountMismatch { expected: u64, recorded: u64 },
}
