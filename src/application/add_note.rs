// src/application/add_note.rs
use crate::application::{NoteDataSource, NoteRepository};
use crate::domain::{DomainError, Note};

/// Persist a note. Timestamps must already be stamped by the caller.
pub struct AddNote<D: NoteDataSource> {
    repository: NoteRepository<D>,
}

impl<D: NoteDataSource> AddNote<D> {
    pub fn new(repository: NoteRepository<D>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, note: &Note) -> Result<Note, DomainError> {
        self.repository.add(note)
    }
}

impl<D: NoteDataSource> Clone for AddNote<D> {
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}
