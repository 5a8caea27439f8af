// src/application/use_cases.rs
use crate::application::{
    AddNote, GetAllNotes, GetNote, GetWordCount, NoteDataSource, NoteRepository, RemoveNote,
};

/// All note use-cases bound to one repository
pub struct UseCases<D: NoteDataSource> {
    pub add_note: AddNote<D>,
    pub get_all_notes: GetAllNotes<D>,
    pub get_note: GetNote<D>,
    pub remove_note: RemoveNote<D>,
    pub get_word_count: GetWordCount,
}

impl<D: NoteDataSource> UseCases<D> {
    pub fn new(repository: NoteRepository<D>) -> Self {
        Self {
            add_note: AddNote::new(repository.clone()),
            get_all_notes: GetAllNotes::new(repository.clone()),
            get_note: GetNote::new(repository.clone()),
            remove_note: RemoveNote::new(repository),
            get_word_count: GetWordCount::new(),
        }
    }
}

impl<D: NoteDataSource> Clone for UseCases<D> {
    fn clone(&self) -> Self {
        Self {
            add_note: self.add_note.clone(),
            get_all_notes: self.get_all_notes.clone(),
            get_note: self.get_note.clone(),
            remove_note: self.remove_note.clone(),
            get_word_count: self.get_word_count,
        }
    }
}
