// src/application/repository.rs
use crate::domain::{DomainError, Note};
use std::sync::Arc;

/// Storage capability behind the repository.
///
/// Calls may block on I/O; the state holders run them on a worker pool.
pub trait NoteDataSource: Send + Sync {
    /// Insert or update keyed by `note.id`. An unset id (0) gets a fresh one;
    /// the returned note carries the id actually stored.
    fn add(&self, note: &Note) -> Result<Note, DomainError>;

    /// `Ok(None)` when no note has that id
    fn get(&self, id: i64) -> Result<Option<Note>, DomainError>;

    fn get_all(&self) -> Result<Vec<Note>, DomainError>;

    /// Removing an unknown id is a no-op
    fn remove(&self, note: &Note) -> Result<(), DomainError>;
}

/// Single access point for notes, forwarding 1:1 to one data source
pub struct NoteRepository<D: NoteDataSource> {
    data_source: Arc<D>,
}

impl<D: NoteDataSource> NoteRepository<D> {
    pub fn new(data_source: D) -> Self {
        Self::from_shared(Arc::new(data_source))
    }

    pub fn from_shared(data_source: Arc<D>) -> Self {
        Self { data_source }
    }

    pub fn add(&self, note: &Note) -> Result<Note, DomainError> {
        self.data_source.add(note)
    }

    pub fn get(&self, id: i64) -> Result<Option<Note>, DomainError> {
        self.data_source.get(id)
    }

    pub fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        self.data_source.get_all()
    }

    pub fn remove(&self, note: &Note) -> Result<(), DomainError> {
        self.data_source.remove(note)
    }
}

impl<D: NoteDataSource> Clone for NoteRepository<D> {
    fn clone(&self) -> Self {
        Self {
            data_source: Arc::clone(&self.data_source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteDataSource;

    #[test]
    fn given_missing_id_when_getting_then_forwards_none() {
        // Arrange
        let repository = NoteRepository::new(MockNoteDataSource::builder().build());

        // Act
        let result = repository.get(42).expect("Lookup should not fail");

        // Assert
        assert!(result.is_none());
    }

    #[test]
    fn given_failing_source_when_listing_then_propagates_storage_error_unchanged() {
        // Arrange
        let repository = NoteRepository::new(
            MockNoteDataSource::builder()
                .with_storage_failure("disk full")
                .build(),
        );

        // Act
        let result = repository.get_all();

        // Assert
        assert_eq!(
            result.expect_err("Should fail"),
            DomainError::Storage("disk full".to_string())
        );
    }

    #[test]
    fn given_cloned_repository_when_adding_then_both_see_same_store() {
        // Arrange
        let repository = NoteRepository::new(MockNoteDataSource::builder().build());
        let clone = repository.clone();

        // Act
        let stored = clone.add(&Note::new("Shared", "")).expect("Add should succeed");

        // Assert
        let fetched = repository.get(stored.id).expect("Lookup should succeed");
        assert_eq!(fetched.map(|n| n.title), Some("Shared".to_string()));
    }
}
