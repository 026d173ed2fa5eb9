//! Outbound calls to the generative-text provider.

use std::fmt::{Debug, Formatter};
use std::future::Future;

use thiserror::Error;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Provider credential. Never printed, never sent to clients.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for blank values so an empty variable counts as missing.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        (!value.is_empty()).then_some(Self(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Credential state of the running server, read once at startup.
#[derive(Clone, Debug, Default)]
pub struct ProviderCredentials {
    pub api_key: Option<ApiKey>,
}

impl ProviderCredentials {
    pub const ENV_VAR: &'static str = "GEMINI_API_KEY";

    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self { api_key }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(Self::ENV_VAR).ok().and_then(ApiKey::new))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Provider answered with a non-success status.
    #[error("provider returned status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("provider request timed out")]
    Timeout,
    #[error("provider request failed: {0}")]
    Transport(String),
    #[error("failed to decode provider response: {0}")]
    Decode(String),
    /// Success status, but the payload carried no generated text.
    #[error("provider response contained no text")]
    EmptyResult,
}

impl From<reqwest::Error> for ProviderError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            Self::Timeout
        } else if value.is_decode() {
            Self::Decode(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}

/// A service that turns one composed prompt into generated text.
///
/// Implementations make exactly one request per call and never retry.
pub trait TextProvider {
    fn generate_text(
        &self,
        api_key: &ApiKey,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>>;
}
