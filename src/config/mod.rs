//! Validated run configuration, built once from the CLI arguments.
use std::time::Duration;

use crate::args::{PositiveUsize, TesterArgs};
use crate::error::ValidationError;

/// Deadline for one request, connection through response headers.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub url: String,
    pub requests: u64,
    pub concurrency: PositiveUsize,
    pub request_timeout: Duration,
}

impl RunConfig {
    #[must_use]
    pub const fn new(url: String, requests: u64, concurrency: PositiveUsize) -> Self {
        Self {
            url,
            requests,
            concurrency,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Validates parsed arguments into a run configuration.
    ///
    /// # Errors
    ///
    /// Returns `MissingUrl` when no target URL was given or it is blank.
    pub fn from_args(args: &TesterArgs) -> Result<Self, ValidationError> {
        let url = args
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(ValidationError::MissingUrl)?;
        Ok(Self::new(url.to_owned(), args.requests, args.concurrency))
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
