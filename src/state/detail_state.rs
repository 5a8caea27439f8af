// src/state/detail_state.rs
use crate::application::{NoteDataSource, UseCases};
use crate::domain::{Clock, DomainError, Note, SystemClock};
use crate::state::Observable;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What the detail view currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentNote {
    Unloaded,
    Found(Note),
    NotFound(i64),
}

impl CurrentNote {
    pub fn note(&self) -> Option<&Note> {
        match self {
            CurrentNote::Found(note) => Some(note),
            _ => None,
        }
    }
}

/// Holds a single note being viewed or edited.
///
/// `saved` flips to true once a save or delete has finished, which tells the
/// view it can navigate away.
pub struct NoteDetailState<D: NoteDataSource + 'static> {
    use_cases: UseCases<D>,
    runtime: Handle,
    clock: Arc<dyn Clock>,
    current_note: Arc<Observable<CurrentNote>>,
    saved: Arc<Observable<bool>>,
    error: Arc<Observable<Option<DomainError>>>,
}

impl<D: NoteDataSource + 'static> NoteDetailState<D> {
    pub fn new(use_cases: UseCases<D>, runtime: Handle) -> Self {
        Self::with_clock(use_cases, runtime, Arc::new(SystemClock))
    }

    pub fn with_clock(use_cases: UseCases<D>, runtime: Handle, clock: Arc<dyn Clock>) -> Self {
        Self {
            use_cases,
            runtime,
            clock,
            current_note: Arc::new(Observable::new(CurrentNote::Unloaded)),
            saved: Arc::new(Observable::new(false)),
            error: Arc::new(Observable::new(None)),
        }
    }

    pub fn current_note(&self) -> &Observable<CurrentNote> {
        &self.current_note
    }

    pub fn saved(&self) -> &Observable<bool> {
        &self.saved
    }

    pub fn error(&self) -> &Observable<Option<DomainError>> {
        &self.error
    }

    pub fn load(&self, id: i64) -> JoinHandle<()> {
        let get_note = self.use_cases.get_note.clone();
        let current_note = Arc::clone(&self.current_note);
        let error = Arc::clone(&self.error);

        self.runtime.spawn_blocking(move || match get_note.execute(id) {
            Ok(Some(note)) => {
                debug!(note_id = id, "Loaded note");
                current_note.publish(CurrentNote::Found(note));
                error.publish(None);
            }
            Ok(None) => {
                debug!(note_id = id, "Note not found");
                current_note.publish(CurrentNote::NotFound(id));
                error.publish(None);
            }
            Err(e) => {
                warn!(note_id = id, error = %e, "Loading note failed");
                error.publish(Some(e));
            }
        })
    }

    /// Stamp timestamps, persist, then publish the stored note and `saved`
    pub fn save(&self, note: Note) -> JoinHandle<()> {
        let note = stamp(note, self.clock.now_millis());
        let add_note = self.use_cases.add_note.clone();
        let current_note = Arc::clone(&self.current_note);
        let saved = Arc::clone(&self.saved);
        let error = Arc::clone(&self.error);

        self.runtime.spawn_blocking(move || match add_note.execute(&note) {
            Ok(stored) => {
                info!(note_id = stored.id, "Saved note");
                current_note.publish(CurrentNote::Found(stored));
                error.publish(None);
                saved.publish(true);
            }
            Err(e) => {
                warn!(note_id = note.id, error = %e, "Saving note failed");
                error.publish(Some(e));
            }
        })
    }

    pub fn delete(&self, note: Note) -> JoinHandle<()> {
        let remove_note = self.use_cases.remove_note.clone();
        let saved = Arc::clone(&self.saved);
        let error = Arc::clone(&self.error);

        self.runtime.spawn_blocking(move || match remove_note.execute(&note) {
            Ok(()) => {
                info!(note_id = note.id, "Deleted note");
                error.publish(None);
                saved.publish(true);
            }
            Err(e) => {
                warn!(note_id = note.id, error = %e, "Deleting note failed");
                error.publish(Some(e));
            }
        })
    }

    pub fn dispose(&self) {
        self.current_note.dispose();
        self.saved.dispose();
        self.error.dispose();
    }
}

impl<D: NoteDataSource + 'static> Drop for NoteDetailState<D> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Set `creation_time` on first save and bump `update_time`, never below creation
pub fn stamp(mut note: Note, now: i64) -> Note {
    if note.creation_time == 0 {
        note.creation_time = now;
    }
    note.update_time = now.max(note.creation_time);
    note
}
