// src/application/remove_note.rs
use crate::application::{NoteDataSource, NoteRepository};
use crate::domain::{DomainError, Note};

pub struct RemoveNote<D: NoteDataSource> {
    repository: NoteRepository<D>,
}

impl<D: NoteDataSource> RemoveNote<D> {
    pub fn new(repository: NoteRepository<D>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, note: &Note) -> Result<(), DomainError> {
        self.repository.remove(note)
    }
}

impl<D: NoteDataSource> Clone for RemoveNote<D> {
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}
