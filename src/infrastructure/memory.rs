// src/infrastructure/memory.rs
use crate::application::NoteDataSource;
use crate::domain::{DomainError, Note};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

#[derive(Debug, Default)]
struct Inner {
    notes: Vec<Note>,
    last_id: i64,
}

/// Volatile store keeping notes in insertion order. Ids start at 1.
#[derive(Debug, Default)]
pub struct InMemoryNoteDataSource {
    inner: Mutex<Inner>,
}

impl InMemoryNoteDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with already persisted notes
    pub fn with_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let notes: Vec<Note> = notes.into_iter().collect();
        let last_id = notes.iter().map(|n| n.id).max().unwrap_or(0);
        Self {
            inner: Mutex::new(Inner { notes, last_id }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, DomainError> {
        self.inner
            .lock()
            .map_err(|_| DomainError::Storage("In-memory store lock poisoned".to_string()))
    }
}

impl NoteDataSource for InMemoryNoteDataSource {
    fn add(&self, note: &Note) -> Result<Note, DomainError> {
        let mut inner = self.lock()?;
        let mut stored = Note {
            word_count: 0,
            ..note.clone()
        };

        if !stored.is_persisted() {
            inner.last_id += 1;
            stored.id = inner.last_id;
        } else {
            inner.last_id = inner.last_id.max(stored.id);
        }

        match inner.notes.iter_mut().find(|n| n.id == stored.id) {
            Some(existing) => *existing = stored.clone(),
            None => inner.notes.push(stored.clone()),
        }
        debug!(note_id = stored.id, "Stored note in memory");
        Ok(stored)
    }

    fn get(&self, id: i64) -> Result<Option<Note>, DomainError> {
        Ok(self.lock()?.notes.iter().find(|n| n.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        Ok(self.lock()?.notes.clone())
    }

    fn remove(&self, note: &Note) -> Result<(), DomainError> {
        self.lock()?.notes.retain(|n| n.id != note.id);
        Ok(())
    }
}
