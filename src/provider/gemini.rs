//! Gemini `generateContent` REST client.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::models::config::ProviderConfig;
use crate::provider::{ApiKey, ProviderError, TextProvider};

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const GENERATE_METHOD: &str = "generateContent";

/// HTTP transport for the Gemini API.
///
/// One request per call; the configured timeout bounds each round trip.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:{GENERATE_METHOD}", self.api_url, self.model)
    }

    /// Names of the models that support `generateContent`.
    pub async fn list_models(&self, api_key: &ApiKey) -> Result<Vec<String>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/models", self.api_url))
            .header(API_KEY_HEADER, api_key.expose())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let parsed: ModelList =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        Ok(parsed
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == GENERATE_METHOD)
            })
            .map(|m| m.name)
            .collect())
    }
}

impl TextProvider for GeminiProvider {
    async fn generate_text(&self, api_key: &ApiKey, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url())
            .header(API_KEY_HEADER, api_key.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        extract_text(parsed).ok_or(ProviderError::EmptyResult)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelInfo {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

/// Text of the first part of the first candidate, if it is non-empty.
fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
        .filter(|text| !text.is_empty())
}

fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}
