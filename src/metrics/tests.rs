use super::*;
use std::future::Future;

fn run_async_test<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), String>>,
{
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| format!("Failed to build runtime: {}", err))?;
    runtime.block_on(future)
}

#[test]
fn failed_outcome_maps_to_timeout_code() -> Result<(), String> {
    if Outcome::Failed.code() != STATUS_TIMEOUT {
        return Err(format!(
            "Expected {}, got {}",
            STATUS_TIMEOUT,
            Outcome::Failed.code()
        ));
    }
    if Outcome::Status(503).code() != 503 {
        return Err("Expected status codes to pass through unchanged".to_owned());
    }
    Ok(())
}

#[test]
fn summary_counts_and_totals() -> Result<(), String> {
    let summary: StatusSummary = [
        Outcome::Status(200),
        Outcome::Failed,
        Outcome::Status(200),
        Outcome::Status(500),
    ]
    .into_iter()
    .collect();

    if summary.count(200) != 2 || summary.count(500) != 1 || summary.count(408) != 1 {
        return Err(format!("Unexpected counts: {:?}", summary));
    }
    if summary.total() != 4 {
        return Err(format!("Expected total 4, got {}", summary.total()));
    }
    if summary.len() != 3 {
        return Err(format!("Expected 3 distinct codes, got {}", summary.len()));
    }
    if summary.count(404) != 0 {
        return Err("Unseen code should count as zero".to_owned());
    }
    Ok(())
}

#[test]
fn summary_iterates_in_code_order() -> Result<(), String> {
    let summary: StatusSummary = [Outcome::Status(500), Outcome::Status(200), Outcome::Failed]
        .into_iter()
        .collect();
    let codes: Vec<u16> = summary.iter().map(|(code, _)| code).collect();
    if codes != vec![200, 408, 500] {
        return Err(format!("Unexpected order: {:?}", codes));
    }
    Ok(())
}

#[test]
fn aggregator_without_increments_is_empty() -> Result<(), String> {
    run_async_test(async {
        let aggregator = OutcomeAggregator::spawn();
        let summary = aggregator
            .snapshot()
            .await
            .map_err(|err| format!("snapshot failed: {}", err))?;
        if !summary.is_empty() {
            return Err(format!("Expected empty summary, got {:?}", summary));
        }
        Ok(())
    })
}

#[test]
fn aggregator_counts_concurrent_increments() -> Result<(), String> {
    run_async_test(async {
        let aggregator = OutcomeAggregator::spawn();
        let mut handles = Vec::new();
        for idx in 0..200u16 {
            let recorder = aggregator.recorder();
            handles.push(tokio::spawn(async move {
                let outcome = if idx % 4 == 0 {
                    Outcome::Failed
                } else {
                    Outcome::Status(200)
                };
                recorder.increment(outcome).await
            }));
        }
        for handle in handles {
            handle
                .await
                .map_err(|err| format!("task failed: {}", err))?
                .map_err(|err| format!("increment failed: {}", err))?;
        }

        let summary = aggregator
            .snapshot()
            .await
            .map_err(|err| format!("snapshot failed: {}", err))?;
        if summary.total() != 200 {
            return Err(format!("Expected 200 outcomes, got {}", summary.total()));
        }
        if summary.count(STATUS_TIMEOUT) != 50 || summary.count(200) != 150 {
            return Err(format!("Unexpected counts: {:?}", summary));
        }
        Ok(())
    })
}
