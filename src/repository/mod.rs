use thiserror::Error;

use crate::domain::history::HistoryEntry;

pub mod file;

pub use file::FileHistoryRepository;

/// Errors raised by history persistence backends.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("history storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history storage is corrupt: {0}")]
    Corrupt(String),
    #[error("failed to serialize history: {0}")]
    Serialization(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Read access to the persisted history slot.
pub trait HistoryReader {
    /// Returns `None` when nothing has been persisted yet.
    fn read_history(&self) -> RepositoryResult<Option<Vec<HistoryEntry>>>;
}

/// Write access to the persisted history slot.
///
/// Every write replaces the whole slot; the last writer wins.
pub trait HistoryWriter {
    fn write_history(&self, entries: &[HistoryEntry]) -> RepositoryResult<()>;
}
