// src/application/get_all_notes.rs
use crate::application::{NoteDataSource, NoteRepository};
use crate::domain::{DomainError, Note};

pub struct GetAllNotes<D: NoteDataSource> {
    repository: NoteRepository<D>,
}

impl<D: NoteDataSource> GetAllNotes<D> {
    pub fn new(repository: NoteRepository<D>) -> Self {
        Self { repository }
    }

    /// All stored notes, in whatever order the store returns them
    pub fn execute(&self) -> Result<Vec<Note>, DomainError> {
        self.repository.get_all()
    }
}

impl<D: NoteDataSource> Clone for GetAllNotes<D> {
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{sample_note, MockNoteDataSource};

    #[test]
    fn given_multiple_notes_when_listing_all_then_returns_all_notes() {
        // Arrange
        let mock = MockNoteDataSource::builder()
            .with_note(sample_note(1, "First", "", 1))
            .with_note(sample_note(2, "Second", "", 2))
            .build();
        let get_all = GetAllNotes::new(NoteRepository::new(mock));

        // Act
        let notes = get_all.execute().expect("List should succeed");

        // Assert
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn given_empty_store_when_listing_all_then_returns_empty() {
        let get_all = GetAllNotes::new(NoteRepository::new(MockNoteDataSource::builder().build()));

        let notes = get_all.execute().expect("List should succeed");

        assert!(notes.is_empty());
    }
}
