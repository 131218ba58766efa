use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::HttpError;

/// Why a GET produced no response. Only used for logging; both variants
/// are counted under the same outcome code.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Request {
                source: Box::new(err),
            }
        }
    }
}

/// Sends one GET request and reports the response status.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<u16, TransportError>;
}

/// [`Transport`] backed by a single shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds the shared client.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialized.
    pub fn new() -> Result<Self, HttpError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|source| HttpError::BuildClientFailed { source })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<u16, TransportError> {
        let response = self.client.get(url).send().await?;
        Ok(response.status().as_u16())
    }
}
