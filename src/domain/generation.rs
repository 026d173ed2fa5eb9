use serde::{Deserialize, Serialize};

use crate::domain::category::ContentCategory;
use crate::domain::types::PromptText;

const TOPIC_LABEL: &str = "Topic/Details:";
const NO_FILLER_DIRECTIVE: &str = "IMPORTANT: Write exactly what is asked. Do not add conversational filler like 'Here is the content you asked for'. Just give the result.";

/// Validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: PromptText,
    pub category: ContentCategory,
}

impl GenerationRequest {
    pub fn new(prompt: PromptText, category: ContentCategory) -> Self {
        Self { prompt, category }
    }

    /// Final text sent to the provider: instruction, topic, then the
    /// no-filler directive, separated by blank lines.
    pub fn compose(&self) -> String {
        format!(
            "{}\n\n{TOPIC_LABEL} {}\n\n{NO_FILLER_DIRECTIVE}",
            self.category.instruction(),
            self.prompt
        )
    }
}

/// Text returned by a successful provider round trip, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub result: String,
}

impl GenerationResult {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}
