use std::collections::BTreeMap;
use std::time::Duration;

/// Code recorded for requests that timed out or failed before a response
/// arrived.
pub const STATUS_TIMEOUT: u16 = 408;

/// Classification of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A response arrived with this HTTP status.
    Status(u16),
    /// The deadline elapsed or the transport failed.
    Failed,
}

impl Outcome {
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Outcome::Status(status) => status,
            Outcome::Failed => STATUS_TIMEOUT,
        }
    }
}

/// Occurrence count per outcome code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    counts: BTreeMap<u16, u64>,
}

impl StatusSummary {
    pub fn increment(&mut self, code: u16) {
        let count = self.counts.entry(code).or_insert(0);
        *count = count.saturating_add(1);
    }

    #[must_use]
    pub fn count(&self, code: u16) -> u64 {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Codes in ascending order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u64)> + '_ {
        self.counts.iter().map(|(code, count)| (*code, *count))
    }
}

impl FromIterator<Outcome> for StatusSummary {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut summary = StatusSummary::default();
        for outcome in iter {
            summary.increment(outcome.code());
        }
        summary
    }
}

/// Everything the report needs about a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub elapsed: Duration,
    pub total_requests: u64,
    pub summary: StatusSummary,
}
