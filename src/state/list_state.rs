// src/state/list_state.rs
use crate::application::{GetAllNotes, GetWordCount, NoteDataSource, UseCases};
use crate::domain::{DomainError, Note};
use crate::state::Observable;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Holds the list of notes shown to the user.
///
/// Every refresh re-reads the whole store on the blocking pool and publishes
/// the new list in one update, newest `update_time` first.
pub struct NoteListState<D: NoteDataSource + 'static> {
    use_cases: UseCases<D>,
    runtime: Handle,
    notes: Arc<Observable<Vec<Note>>>,
    error: Arc<Observable<Option<DomainError>>>,
}

impl<D: NoteDataSource + 'static> NoteListState<D> {
    pub fn new(use_cases: UseCases<D>, runtime: Handle) -> Self {
        Self {
            use_cases,
            runtime,
            notes: Arc::new(Observable::new(Vec::new())),
            error: Arc::new(Observable::new(None)),
        }
    }

    pub fn notes(&self) -> &Observable<Vec<Note>> {
        &self.notes
    }

    /// Last refresh failure, cleared by the next successful refresh
    pub fn error(&self) -> &Observable<Option<DomainError>> {
        &self.error
    }

    pub fn refresh(&self) -> JoinHandle<()> {
        let get_all_notes = self.use_cases.get_all_notes.clone();
        let get_word_count = self.use_cases.get_word_count;
        let notes = Arc::clone(&self.notes);
        let error = Arc::clone(&self.error);

        self.runtime.spawn_blocking(move || {
            match load_notes(&get_all_notes, &get_word_count) {
                Ok(loaded) => {
                    debug!(count = loaded.len(), "Publishing refreshed notes");
                    notes.publish(loaded);
                    error.publish(None);
                }
                Err(e) => {
                    warn!(error = %e, "Refreshing notes failed");
                    error.publish(Some(e));
                }
            }
        })
    }

    /// Stop publishing; results of in-flight work are discarded
    pub fn dispose(&self) {
        self.notes.dispose();
        self.error.dispose();
    }
}

impl<D: NoteDataSource + 'static> Drop for NoteListState<D> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn load_notes<D: NoteDataSource>(
    get_all_notes: &GetAllNotes<D>,
    get_word_count: &GetWordCount,
) -> Result<Vec<Note>, DomainError> {
    let notes = get_all_notes.execute()?;
    Ok(with_word_counts_newest_first(notes, get_word_count))
}

/// Attach fresh word counts and order by `update_time` descending.
/// The sort is stable, so ties keep store order.
pub fn with_word_counts_newest_first(notes: Vec<Note>, get_word_count: &GetWordCount) -> Vec<Note> {
    let mut notes: Vec<Note> = notes
        .into_iter()
        .map(|mut note| {
            note.word_count = get_word_count.execute(&note);
            note
        })
        .collect();
    notes.sort_by(|a, b| b.update_time.cmp(&a.update_time));
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::sample_note;

    #[test]
    fn given_update_times_when_ordering_then_newest_first() {
        let notes = vec![
            sample_note(1, "a", "", 5),
            sample_note(2, "b", "", 3),
            sample_note(3, "c", "", 9),
        ];

        let ordered = with_word_counts_newest_first(notes, &GetWordCount::new());

        let times: Vec<_> = ordered.iter().map(|n| n.update_time).collect();
        assert_eq!(times, vec![9, 5, 3]);
    }

    #[test]
    fn given_equal_update_times_when_ordering_then_keeps_store_order() {
        let notes = vec![
            sample_note(1, "first", "", 4),
            sample_note(2, "second", "", 4),
            sample_note(3, "third", "", 7),
        ];

        let ordered = with_word_counts_newest_first(notes, &GetWordCount::new());

        let ids: Vec<_> = ordered.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn given_stale_word_count_when_ordering_then_recomputes_it() {
        let mut stale = sample_note(1, "three word title", "and more", 1);
        stale.word_count = 99;

        let ordered = with_word_counts_newest_first(vec![stale], &GetWordCount::new());

        assert_eq!(ordered[0].word_count, 5);
    }
}
