// src/application/get_note.rs
use crate::application::{NoteDataSource, NoteRepository};
use crate::domain::{DomainError, Note};

pub struct GetNote<D: NoteDataSource> {
    repository: NoteRepository<D>,
}

impl<D: NoteDataSource> GetNote<D> {
    pub fn new(repository: NoteRepository<D>) -> Self {
        Self { repository }
    }

    pub fn execute(&self, id: i64) -> Result<Option<Note>, DomainError> {
        self.repository.get(id)
    }
}

impl<D: NoteDataSource> Clone for GetNote<D> {
    fn clone(&self) -> Self {
        Self::new(self.repository.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{sample_note, MockNoteDataSource};

    #[test]
    fn given_existing_note_when_getting_then_returns_note() {
        // Arrange
        let mock = MockNoteDataSource::builder()
            .with_note(sample_note(3, "Title", "Body", 10))
            .build();
        let get_note = GetNote::new(NoteRepository::new(mock));

        // Act
        let note = get_note.execute(3).expect("Lookup should succeed");

        // Assert
        assert_eq!(note.map(|n| n.title), Some("Title".to_string()));
    }

    #[test]
    fn given_unknown_id_when_getting_then_returns_none() {
        // Arrange
        let get_note = GetNote::new(NoteRepository::new(MockNoteDataSource::builder().build()));

        // Act
        let note = get_note.execute(999).expect("Lookup should succeed");

        // Assert
        assert!(note.is_none());
    }
}
