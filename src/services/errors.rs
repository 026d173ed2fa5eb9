use thiserror::Error;

use crate::forms::generate::GenerateFormError;

pub const VALIDATION_MESSAGE: &str = "Prompt and Content Type are required.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
pub const CONFIGURATION_MESSAGE: &str = "Server configuration error: API Key missing.";
pub const PROVIDER_FALLBACK_MESSAGE: &str = "Failed to fetch response from AI provider.";
pub const PROVIDER_TIMEOUT_MESSAGE: &str = "The AI provider did not respond in time.";
pub const EMPTY_RESULT_MESSAGE: &str = "No content generated.";
pub const INTERNAL_MESSAGE: &str = "Internal Server Error";

/// Failure taxonomy of the generation gateway.
///
/// `Display` is for operators; [`ServiceError::public_message`] is the only
/// text allowed to reach the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The request used a verb other than `POST`.
    #[error("method not allowed")]
    MethodNotAllowed,
    /// Prompt or category missing or blank.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The provider credential is not configured.
    #[error("provider credential is not configured")]
    Configuration,
    /// The provider failed or answered with a non-success status.
    #[error("provider error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Provider {
        status: u16,
        message: Option<String>,
    },
    /// The provider succeeded but produced no usable text.
    #[error("provider returned no content")]
    EmptyResult,
    /// Any other unexpected failure.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::Validation(_) => 400,
            Self::Configuration | Self::EmptyResult | Self::Internal => 500,
            Self::Provider { status, .. } => *status,
        }
    }

    pub fn public_message(&self) -> &str {
        match self {
            Self::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
            Self::Validation(_) => VALIDATION_MESSAGE,
            Self::Configuration => CONFIGURATION_MESSAGE,
            Self::Provider { message, .. } => {
                message.as_deref().unwrap_or(PROVIDER_FALLBACK_MESSAGE)
            }
            Self::EmptyResult => EMPTY_RESULT_MESSAGE,
            Self::Internal => INTERNAL_MESSAGE,
        }
    }
}

impl From<GenerateFormError> for ServiceError {
    fn from(val: GenerateFormError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
