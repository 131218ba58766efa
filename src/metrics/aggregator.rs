use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{AppResult, LoadError};

use super::{Outcome, StatusSummary};

const OUTCOME_CHANNEL_CAPACITY: usize = 1024;

/// Owns the collector task that folds outcomes into a [`StatusSummary`].
///
/// Increments are serialized through a channel, so request tasks never share
/// the map. The summary can only be read by consuming the aggregator, which
/// waits until every [`OutcomeRecorder`] has been dropped.
#[derive(Debug)]
pub struct OutcomeAggregator {
    tx: mpsc::Sender<Outcome>,
    collector: JoinHandle<StatusSummary>,
}

/// Cloneable write handle handed to each request task.
#[derive(Debug, Clone)]
pub struct OutcomeRecorder {
    tx: mpsc::Sender<Outcome>,
}

impl OutcomeAggregator {
    /// Spawns the collector on the current tokio runtime.
    #[must_use]
    pub fn spawn() -> Self {
        let (tx, mut rx) = mpsc::channel::<Outcome>(OUTCOME_CHANNEL_CAPACITY);
        let collector = tokio::spawn(async move {
            let mut summary = StatusSummary::default();
            while let Some(outcome) = rx.recv().await {
                summary.increment(outcome.code());
            }
            summary
        });
        Self { tx, collector }
    }

    #[must_use]
    pub fn recorder(&self) -> OutcomeRecorder {
        OutcomeRecorder {
            tx: self.tx.clone(),
        }
    }

    /// Closes the aggregator's own sender and waits for the collector to drain.
    ///
    /// Resolves once all recorders are gone, so every task holding one must
    /// have finished first.
    ///
    /// # Errors
    ///
    /// Returns an error if the collector task panicked or was cancelled.
    pub async fn snapshot(self) -> AppResult<StatusSummary> {
        let Self { tx, collector } = self;
        drop(tx);
        Ok(collector.await?)
    }
}

impl OutcomeRecorder {
    /// Adds one occurrence of `outcome` to the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the collector is no longer receiving.
    pub async fn increment(&self, outcome: Outcome) -> Result<(), LoadError> {
        self.tx
            .send(outcome)
            .await
            .map_err(|err| LoadError::CollectorClosed { code: err.0.code() })
    }
}
