// src/domain/note.rs
use serde::{Deserialize, Serialize};

/// A single note. `id == 0` means the note has never been persisted.
///
/// Timestamps are epoch milliseconds. `word_count` is derived from title and
/// content and is never read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub creation_time: i64,
    pub update_time: i64,
    #[serde(default)]
    pub word_count: usize,
}

impl Note {
    /// Fresh, unpersisted note. Timestamps are stamped on save.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            content: content.into(),
            creation_time: 0,
            update_time: 0,
            word_count: 0,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
