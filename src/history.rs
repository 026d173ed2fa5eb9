//! Bounded, durable cache of past generations.
//!
//! Newest entries come first. Every mutation rewrites the whole persisted
//! sequence through the repository before it becomes visible in memory.

use chrono::{Local, Utc};
use thiserror::Error;

use crate::domain::category::ContentCategory;
use crate::domain::history::HistoryEntry;
use crate::domain::types::EntryId;
use crate::repository::{HistoryReader, HistoryWriter, RepositoryError};

/// Maximum number of entries retained.
pub const HISTORY_CAP: usize = 10;

const DATE_FORMAT: &str = "%-m/%-d/%Y";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to persist history: {0}")]
    Persist(#[from] RepositoryError),
}

/// In-memory view of the persisted history together with its backend.
pub struct HistoryCache<R> {
    entries: Vec<HistoryEntry>,
    repo: R,
}

impl<R> HistoryCache<R>
where
    R: HistoryReader + HistoryWriter,
{
    /// Read the persisted sequence. Missing or unreadable storage yields an
    /// empty history instead of an error.
    pub fn load(repo: R) -> Self {
        let entries = Self::read_entries(&repo);
        Self { entries, repo }
    }

    /// Re-read the persisted slot, replacing the in-memory view.
    pub fn reload(&mut self) {
        self.entries = Self::read_entries(&self.repo);
    }

    fn read_entries(repo: &R) -> Vec<HistoryEntry> {
        match repo.read_history() {
            Ok(Some(mut entries)) => {
                entries.truncate(HISTORY_CAP);
                entries
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Discarding unreadable history: {e}");
                Vec::new()
            }
        }
    }

    /// Build an entry stamped now, with an id strictly greater than the
    /// newest recorded one.
    pub fn new_entry(
        &self,
        category: ContentCategory,
        prompt: impl Into<String>,
        result: impl Into<String>,
    ) -> HistoryEntry {
        let now = Utc::now().timestamp_millis().max(1);
        let id = match self.entries.first() {
            Some(newest) if newest.id.get() >= now => newest.id.successor(),
            _ => EntryId::new(now).unwrap_or(EntryId::MIN),
        };

        HistoryEntry {
            id,
            category,
            prompt: prompt.into(),
            result: result.into(),
            created_date: Local::now().format(DATE_FORMAT).to_string(),
        }
    }

    /// Prepend `entry`, drop anything beyond [`HISTORY_CAP`] and persist.
    ///
    /// The in-memory view only changes once the write has succeeded.
    pub fn record(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut next = Vec::with_capacity(HISTORY_CAP + 1);
        next.push(entry);
        next.extend(self.entries.iter().cloned());
        next.truncate(HISTORY_CAP);

        self.repo.write_history(&next)?;
        self.entries = next;
        Ok(())
    }
}

impl<R> HistoryCache<R> {
    /// Look up an entry for replay. A miss is `None`.
    pub fn select(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
