use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::ContentCategory;
use crate::domain::generation::GenerationRequest;
use crate::domain::types::{PromptText, TypeConstraintError};

/// Body of `POST /api/generate`.
///
/// Missing fields deserialize as empty strings so that they are reported by
/// validation rather than by the JSON extractor.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct GenerateForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub prompt: String,
    #[serde(default, alias = "type")]
    #[validate(length(min = 1))]
    pub category: String,
}

impl GenerateForm {
    pub fn new(prompt: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            category: category.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GenerateFormError {
    #[error("Generate form validation failed: {0}")]
    Validation(String),
    #[error("Generate form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for GenerateFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for GenerateFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<GenerateForm> for GenerationRequest {
    type Error = GenerateFormError;

    fn try_from(value: GenerateForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(GenerationRequest::new(
            PromptText::new(value.prompt)?,
            ContentCategory::from_label(&value.category),
        ))
    }
}
