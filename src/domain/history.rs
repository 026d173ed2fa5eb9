use serde::{Deserialize, Serialize};

use crate::domain::category::ContentCategory;
use crate::domain::types::EntryId;

/// One past successful generation, replayable by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: EntryId,
    pub category: ContentCategory,
    pub prompt: String,
    pub result: String,
    /// Local date of creation, formatted for display.
    pub created_date: String,
}
