use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use crate::metrics::Outcome;

use super::Transport;

/// Issues one GET against `url` and classifies the result.
///
/// The `budget` covers the whole exchange and starts when this function is
/// called. Any failure, whether the deadline or the transport, becomes
/// [`Outcome::Failed`]; nothing is retried.
pub async fn execute(transport: &dyn Transport, url: &str, budget: Duration) -> Outcome {
    match timeout(budget, transport.get(url)).await {
        Ok(Ok(status)) => Outcome::Status(status),
        Ok(Err(err)) => {
            debug!("Request to {} failed: {}", url, err);
            Outcome::Failed
        }
        Err(elapsed) => {
            debug!("Request to {} timed out after {:?}: {}", url, budget, elapsed);
            Outcome::Failed
        }
    }
}
