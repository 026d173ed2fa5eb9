//! JSON file backend for the history slot.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::domain::history::HistoryEntry;
use crate::repository::{HistoryReader, HistoryWriter, RepositoryError, RepositoryResult};

/// History stored as a single JSON array in one file.
///
/// Writes go to a sibling temp file which is synced and renamed over the
/// target, so readers observe either the old or the new sequence.
#[derive(Debug, Clone)]
pub struct FileHistoryRepository {
    path: PathBuf,
}

impl FileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryReader for FileHistoryRepository {
    fn read_history(&self) -> RepositoryResult<Option<Vec<HistoryEntry>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| RepositoryError::Corrupt(e.to_string()))
    }
}

impl HistoryWriter for FileHistoryRepository {
    fn write_history(&self, entries: &[HistoryEntry]) -> RepositoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        let tmp_path = self.tmp_path();
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(&json)?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::ContentCategory;
    use crate::domain::types::EntryId;
    use tempfile::TempDir;

    fn sample_entry(id: i64) -> HistoryEntry {
        HistoryEntry {
            id: EntryId::new(id).unwrap(),
            category: ContentCategory::BlogIdea,
            prompt: format!("prompt {id}"),
            result: format!("## Result {id}\n\n- point"),
            created_date: "10/19/2026".to_string(),
        }
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let repo = FileHistoryRepository::new(dir.path().join("history.json"));

        assert!(repo.read_history().unwrap().is_none());
    }

    #[test]
    fn writes_and_reads_back_in_order() {
        let dir = TempDir::new().unwrap();
        let repo = FileHistoryRepository::new(dir.path().join("nested/history.json"));
        let entries = vec![sample_entry(3), sample_entry(2), sample_entry(1)];

        repo.write_history(&entries).unwrap();

        assert_eq!(repo.read_history().unwrap(), Some(entries));
        assert!(!repo.tmp_path().exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{not json").unwrap();
        let repo = FileHistoryRepository::new(path);

        assert!(matches!(
            repo.read_history(),
            Err(RepositoryError::Corrupt(_))
        ));
    }

    #[test]
    fn uses_camel_case_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let repo = FileHistoryRepository::new(&path);

        repo.write_history(&[sample_entry(5)]).unwrap();

        let raw = fs::read_to_string(path).unwrap();
        assert!(raw.contains("\"createdDate\""));
        assert!(raw.contains("\"Blog Idea\""));
    }
}
