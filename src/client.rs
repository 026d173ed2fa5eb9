//! HTTP client for the generation gateway.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::category::ContentCategory;
use crate::forms::generate::GenerateForm;

const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Upper bound for one gateway round trip. Longer than the gateway's own
/// provider timeout so a provider 504 reaches the caller intact.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The gateway answered with a non-success status.
    #[error("{message}")]
    Gateway { status: u16, message: String },
    /// The gateway could not be reached or answered with garbage.
    #[error("Failed to connect to the server.")]
    Transport(String),
}

/// Something that can turn a prompt and category into generated text.
pub trait GenerateClient {
    fn generate(
        &self,
        prompt: &str,
        category: ContentCategory,
    ) -> impl Future<Output = Result<String, ClientError>>;
}

/// Gateway client over HTTP.
#[derive(Clone, Debug)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SuccessBody {
    result: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Category labels offered by the gateway.
    pub async fn categories(&self) -> Result<Vec<String>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/categories", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}

impl GenerateClient for GatewayClient {
    async fn generate(&self, prompt: &str, category: ContentCategory) -> Result<String, ClientError> {
        let form = GenerateForm::new(prompt, category.label());
        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&form)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());
            return Err(ClientError::Gateway {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<SuccessBody>(&body)
            .map(|b| b.result)
            .map_err(|e| ClientError::Transport(e.to_string()))
    }
}
