//! Client-side generation session: current inputs, last result and history.

use std::fs;
use std::path::Path;

use crate::client::GenerateClient;
use crate::domain::category::ContentCategory;
use crate::domain::types::EntryId;
use crate::history::HistoryCache;
use crate::repository::{HistoryReader, HistoryWriter};

pub const EMPTY_PROMPT_MESSAGE: &str = "Please enter a prompt.";
pub const DEFAULT_EXPORT_FILE: &str = "generated-content.txt";

/// What the user sees: the inputs, the latest output or error, and history.
///
/// [`Studio::submit`] takes `&mut self`, so only one generation can be in
/// flight per studio.
pub struct Studio<C, R> {
    client: C,
    history: HistoryCache<R>,
    pub category: ContentCategory,
    pub prompt: String,
    result: Option<String>,
    error: Option<String>,
}

impl<C, R> Studio<C, R>
where
    C: GenerateClient,
    R: HistoryReader + HistoryWriter,
{
    pub fn new(client: C, history: HistoryCache<R>) -> Self {
        Self {
            client,
            history,
            category: ContentCategory::default(),
            prompt: String::new(),
            result: None,
            error: None,
        }
    }

    /// Generate for the current prompt and category.
    ///
    /// On success the result is shown and recorded in history. On failure the
    /// error is shown, the prompt is kept and history is left alone. Returns
    /// whether a result was produced.
    pub async fn submit(&mut self) -> bool {
        if self.prompt.trim().is_empty() {
            self.error = Some(EMPTY_PROMPT_MESSAGE.to_string());
            return false;
        }

        self.error = None;
        self.result = None;

        match self.client.generate(&self.prompt, self.category).await {
            Ok(text) => {
                let entry = self
                    .history
                    .new_entry(self.category, self.prompt.clone(), text.clone());
                if let Err(e) = self.history.record(entry) {
                    log::warn!("Generated content was not saved to history: {e}");
                }
                self.result = Some(text);
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }
}

impl<C, R> Studio<C, R> {
    /// Show a past generation again without calling the gateway.
    pub fn replay(&mut self, id: EntryId) -> bool {
        let Some(entry) = self.history.select(id) else {
            return false;
        };

        self.category = entry.category;
        self.prompt = entry.prompt.clone();
        self.result = Some(entry.result.clone());
        self.error = None;
        true
    }

    /// Write the current result verbatim to `path`.
    pub fn export(&self, path: impl AsRef<Path>) -> std::io::Result<bool> {
        match &self.result {
            Some(result) => {
                fs::write(path, result)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn history(&self) -> &HistoryCache<R> {
        &self.history
    }
}
