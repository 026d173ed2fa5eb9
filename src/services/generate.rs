use crate::domain::generation::{GenerationRequest, GenerationResult};
use crate::forms::generate::GenerateForm;
use crate::provider::{ProviderCredentials, ProviderError, TextProvider};

use super::errors::PROVIDER_TIMEOUT_MESSAGE;
use super::{ServiceError, ServiceResult};

/// Core business logic for the `POST /api/generate` endpoint.
///
/// Validates the form, checks that a credential is configured, composes the
/// final prompt and issues exactly one provider call. Nothing is called when
/// validation or the configuration check fails. The returned text is the
/// provider's output, untouched.
pub async fn generate<P>(
    form: GenerateForm,
    credentials: &ProviderCredentials,
    provider: &P,
) -> ServiceResult<GenerationResult>
where
    P: TextProvider,
{
    let request: GenerationRequest = form.try_into()?;

    let Some(api_key) = credentials.api_key.as_ref() else {
        log::error!("{} is not set; refusing to call the provider", ProviderCredentials::ENV_VAR);
        return Err(ServiceError::Configuration);
    };

    let prompt = request.compose();

    match provider.generate_text(api_key, &prompt).await {
        Ok(text) => Ok(GenerationResult::new(text)),
        Err(e) => Err(normalize_provider_error(e)),
    }
}

fn normalize_provider_error(error: ProviderError) -> ServiceError {
    match error {
        ProviderError::Status { status, message } => {
            log::error!(
                "Provider returned status {status}: {}",
                message.as_deref().unwrap_or("<no message>")
            );
            ServiceError::Provider { status, message }
        }
        ProviderError::Timeout => {
            log::error!("Provider request timed out");
            ServiceError::Provider {
                status: 504,
                message: Some(PROVIDER_TIMEOUT_MESSAGE.to_string()),
            }
        }
        ProviderError::EmptyResult => {
            log::error!("Provider response contained no text");
            ServiceError::EmptyResult
        }
        ProviderError::Transport(_) | ProviderError::Decode(_) => {
            log::error!("Failed to generate content: {error}");
            ServiceError::Internal
        }
    }
}
