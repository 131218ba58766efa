use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::{AppResult, LoadError};
use crate::http::{Transport, execute};
use crate::metrics::{OutcomeAggregator, RunResult};

/// Issues `config.requests` GETs with at most `config.concurrency` in flight
/// and returns once every one of them has recorded its outcome.
///
/// A slot is acquired before each task is spawned and travels with the task,
/// so it is released whenever the task ends. Request failures never abort the
/// run; they are counted like any other outcome.
///
/// # Errors
///
/// Returns an error only if the dispatch machinery itself breaks: a task
/// panics, the slot pool closes, or the outcome count does not match the
/// number of requests.
pub async fn run_load(
    config: &RunConfig,
    transport: &Arc<dyn Transport>,
) -> AppResult<RunResult> {
    let started = Instant::now();
    info!(
        "Dispatching {} requests to {} with concurrency {}",
        config.requests, config.url, config.concurrency
    );

    // Slots past the request count never contend, so clamping is lossless.
    let slots = Arc::new(Semaphore::new(
        config.concurrency.get().min(Semaphore::MAX_PERMITS),
    ));
    let aggregator = OutcomeAggregator::spawn();
    let url: Arc<str> = Arc::from(config.url.as_str());
    let budget = config.request_timeout;
    let mut tasks = JoinSet::new();

    for _ in 0..config.requests {
        let slot = Arc::clone(&slots)
            .acquire_owned()
            .await
            .map_err(|source| LoadError::SlotPoolClosed { source })?;
        let transport = Arc::clone(transport);
        let url = Arc::clone(&url);
        let recorder = aggregator.recorder();

        tasks.spawn(async move {
            let _slot = slot;
            let outcome = execute(transport.as_ref(), &url, budget).await;
            recorder.increment(outcome).await
        });

        while let Some(joined) = tasks.try_join_next() {
            joined??;
        }
    }

    while let Some(joined) = tasks.join_next().await {
        joined??;
    }

    let summary = aggregator.snapshot().await?;
    let recorded = summary.total();
    if recorded != config.requests {
        return Err(LoadError::OutcomeCountMismatch {
            expected: config.requests,
            recorded,
        }
        .into());
    }

    let elapsed = started.elapsed();
    debug!("Run finished in {:?} with {} distinct codes", elapsed, summary.len());

    Ok(RunResult {
        elapsed,
        total_requests: config.requests,
        summary,
    })
}
