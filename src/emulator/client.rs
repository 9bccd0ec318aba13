//! Transport for emulator requests

use crate::api::{UssdRequest, UssdResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport-level failures. The server itself never errors on menu input,
/// so anything here means the session is unusable.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP Error: {0}")]
    Status(u16),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

/// Sends one USSD request and returns the gateway's reply
#[async_trait]
pub trait UssdTransport: Send + Sync {
    async fn send(&self, request: &UssdRequest) -> Result<UssdResponse, ClientError>;
}

/// JSON-over-HTTP transport
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl UssdTransport for HttpTransport {
    async fn send(&self, request: &UssdRequest) -> Result<UssdResponse, ClientError> {
        let response = self.client.post(&self.url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "USSD request rejected");
            return Err(ClientError::Status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
