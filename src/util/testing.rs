// src/util/testing.rs

use anyhow::Result;
use std::env;
use std::sync::{Mutex, PoisonError};
use tokio::sync::oneshot;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteDataSource;
use crate::domain::{DomainError, Note};
use crate::infrastructure::InMemoryNoteDataSource;

/// Persisted note with `creation_time == update_time`
pub fn sample_note(id: i64, title: &str, content: &str, update_time: i64) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        creation_time: update_time,
        update_time,
        word_count: 0,
    }
}

/// Shared mock data source for testing use cases and state holders
///
/// Backed by an in-memory store, with optional injected storage failure and
/// a gate that holds `get_all` until released.
///
/// # Examples
///
/// ```
/// use notekeeper::util::testing::{sample_note, MockNoteDataSource};
///
/// let mock = MockNoteDataSource::builder()
///     .with_note(sample_note(1, "Title", "Body", 10))
///     .build();
/// ```
pub struct MockNoteDataSource {
    store: InMemoryNoteDataSource,
    failure: Option<String>,
    get_all_gate: Gate,
    get_gate: Gate,
    add_gate: Gate,
}

type Gate = Mutex<Option<oneshot::Receiver<()>>>;

/// Block on a one-shot gate the first time it is reached
fn pass_gate(gate: &Gate, operation: &str) {
    let gate = gate.lock().unwrap_or_else(PoisonError::into_inner).take();
    if let Some(gate) = gate {
        debug!(operation, "Waiting for gate");
        // a dropped sender releases the gate as well
        let _ = gate.blocking_recv();
    }
}

impl MockNoteDataSource {
    pub fn builder() -> MockNoteDataSourceBuilder {
        MockNoteDataSourceBuilder::new()
    }

    fn check_failure(&self) -> Result<(), DomainError> {
        match &self.failure {
            Some(message) => Err(DomainError::Storage(message.clone())),
            None => Ok(()),
        }
    }
}

impl NoteDataSource for MockNoteDataSource {
    fn add(&self, note: &Note) -> Result<Note, DomainError> {
        pass_gate(&self.add_gate, "add");
        self.check_failure()?;
        self.store.add(note)
    }

    fn get(&self, id: i64) -> Result<Option<Note>, DomainError> {
        pass_gate(&self.get_gate, "get");
        self.check_failure()?;
        self.store.get(id)
    }

    fn get_all(&self) -> Result<Vec<Note>, DomainError> {
        pass_gate(&self.get_all_gate, "get_all");
        self.check_failure()?;
        self.store.get_all()
    }

    fn remove(&self, note: &Note) -> Result<(), DomainError> {
        self.check_failure()?;
        self.store.remove(note)
    }
}

/// Builder for MockNoteDataSource
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteDataSourceBuilder {
    notes: Vec<Note>,
    failure: Option<String>,
    get_all_gate: Option<oneshot::Receiver<()>>,
    get_gate: Option<oneshot::Receiver<()>>,
    add_gate: Option<oneshot::Receiver<()>>,
}

impl MockNoteDataSourceBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            failure: None,
            get_all_gate: None,
            get_gate: None,
            add_gate: None,
        }
    }

    /// Seed a persisted note, kept in insertion order
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every operation fail with `DomainError::Storage(message)`
    pub fn with_storage_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    /// Block the first `get_all` until the paired sender fires or is dropped
    pub fn with_get_all_gate(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.get_all_gate = Some(gate);
        self
    }

    /// Block the first `get` until the paired sender fires or is dropped
    pub fn with_get_gate(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.get_gate = Some(gate);
        self
    }

    /// Block the first `add` until the paired sender fires or is dropped
    pub fn with_add_gate(mut self, gate: oneshot::Receiver<()>) -> Self {
        self.add_gate = Some(gate);
        self
    }

    pub fn build(self) -> MockNoteDataSource {
        MockNoteDataSource {
            store: InMemoryNoteDataSource::with_notes(self.notes),
            failure: self.failure,
            get_all_gate: Mutex::new(self.get_all_gate),
            get_gate: Mutex::new(self.get_gate),
            add_gate: Mutex::new(self.add_gate),
        }
    }
}

impl Default for MockNoteDataSourceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["tokio", "runtime", "rusqlite"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[test]
    fn given_note_added_when_getting_note_then_returns_note() {
        let mock = MockNoteDataSource::builder()
            .with_note(sample_note(123, "Test Title", "Body", 1))
            .build();

        let result = mock.get(123).expect("Lookup should succeed").expect("Note should exist");
        assert_eq!(result.id, 123);
        assert_eq!(result.title, "Test Title");
    }

    #[test]
    fn given_storage_failure_configured_when_calling_any_operation_then_returns_storage_error() {
        let mock = MockNoteDataSource::builder()
            .with_note(sample_note(1, "t", "", 1))
            .with_storage_failure("boom")
            .build();

        assert!(matches!(mock.get(1), Err(DomainError::Storage(_))));
        assert!(matches!(mock.get_all(), Err(DomainError::Storage(_))));
        assert!(matches!(mock.add(&Note::new("a", "")), Err(DomainError::Storage(_))));
        assert!(matches!(
            mock.remove(&sample_note(1, "t", "", 1)),
            Err(DomainError::Storage(_))
        ));
    }

    #[test]
    fn given_dropped_gate_sender_when_listing_then_does_not_block() {
        let (sender, receiver) = oneshot::channel();
        let mock = MockNoteDataSource::builder()
            .with_note(sample_note(1, "t", "", 1))
            .with_get_all_gate(receiver)
            .build();
        drop(sender);

        let notes = mock.get_all().expect("List should succeed");
        assert_eq!(notes.len(), 1);
    }
}
