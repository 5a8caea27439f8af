// src/infrastructure/sqlite.rs
use crate::application::NoteDataSource;
use crate::constants::SCHEMA_VERSION;
use crate::domain::{DomainError, Note};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// Notes stored in a local SQLite database.
///
/// One connection guarded by a mutex; concurrent writers are serialized here.
#[derive(Debug)]
pub struct SqliteNoteDataSource {
    conn: Mutex<Connection>,
}

impl SqliteNoteDataSource {
    /// Open (or create) the database at `path`, creating parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Opening note database");

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DomainError::Storage(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(&path)?;
        let source = Self::with_connection(conn)?;
        info!(?path, "Opened note database");
        Ok(source)
    }

    pub fn open_in_memory() -> Result<Self, DomainError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, DomainError> {
        initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, DomainError> {
        self.conn
            .lock()
            .map_err(|_| DomainError::Storage("Database connection lock poisoned".to_string()))
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

fn initialize_schema(conn: &Connection) -> Result<(), DomainError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS notes (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            title           TEXT NOT NULL,
            content         TEXT NOT NULL,
            creation_time   INTEGER NOT NULL,
            update_time     INTEGER NOT NULL
        )",
        [],
    )?;

    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
        debug!(from = version, to = SCHEMA_VERSION, "Updated schema version");
    }
    Ok(())
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        creation_time: row.get(3)?,
        update_time: row.get(4)?,
        word_count: 0,
    })
}

impl NoteDataSource for SqliteNoteDataSource {
    #[instrument(level = "debug", skip(self, note), fields(id = note.id))]
    fn add(&self, note: &Note) -> Result<Note, DomainError> {
        let conn = self.lock()?;

        let id = if note.is_persisted() {
            conn.execute(
                "INSERT INTO notes (id, title, content, creation_time, update_time)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    content = excluded.content,
                    creation_time = excluded.creation_time,
                    update_time = excluded.update_time",
                params![
                    note.id,
                    note.title,
                    note.content,
                    note.creation_time,
                    note.update_time
                ],
            )?;
            note.id
        } else {
            conn.execute(
                "INSERT INTO notes (title, content, creation_time, update_time)
                 VALUES (?1, ?2, ?3, ?4)",
                params![note.title, note.content, note.creation_time, note.update_time],
            )?;
            conn.last_insert_rowid()
        };

        debug!(note_id = id, "Stored note");
        Ok(Note {
            id,
            word_count: 0,
            ..note.clone()
        })
    }

    #[instrument(level = "debug", skip(self))]
    fn get(&self, id: i64) -> Result<Option<Note>, DomainError> {
        let conn = self.lock()?;
        let note = conn
            .query_row(
                "SELECT id, title, content, creation_time, update_time FROM notes WHERE id = ?1",
                params![id],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT id, title, content, creation_time, update_time FROM notes")?;
        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(count = notes.len(), "Loaded notes");
        Ok(notes)
    }

    #[instrument(level = "debug", skip(self, note), fields(id = note.id))]
    fn remove(&self, note: &Note) -> Result<(), DomainError> {
        let conn = self.lock()?;
        let deleted = conn.execute("DELETE FROM notes WHERE id = ?1", params![note.id])?;
        if deleted == 0 {
            debug!(note_id = note.id, "No note to remove");
        } else {
            info!(note_id = note.id, "Removed note");
        }
        Ok(())
    }
}
