use anyhow::{Context, Result};
use notekeeper::application::{NoteRepository, UseCases};
use notekeeper::infrastructure::SqliteNoteDataSource;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test fixture for working with a temporary notes database
#[allow(dead_code)]
pub struct TestDatabase {
    _temp_dir: TempDir,
    pub database_path: PathBuf,
}

#[allow(dead_code)]
impl TestDatabase {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let database_path = temp_dir.path().join("nested").join("notes.db");

        Ok(Self {
            _temp_dir: temp_dir,
            database_path,
        })
    }

    pub fn open_data_source(&self) -> Result<SqliteNoteDataSource> {
        Ok(SqliteNoteDataSource::open(&self.database_path)?)
    }

    pub fn use_cases(&self) -> Result<UseCases<SqliteNoteDataSource>> {
        Ok(UseCases::new(NoteRepository::new(self.open_data_source()?)))
    }
}
