// src/application/mod.rs
pub mod add_note;
pub mod get_all_notes;
pub mod get_note;
pub mod remove_note;
pub mod repository;
pub mod use_cases;
pub mod word_count;

pub use add_note::AddNote;
pub use get_all_notes::GetAllNotes;
pub use get_note::GetNote;
pub use remove_note::RemoveNote;
pub use repository::{NoteDataSource, NoteRepository};
pub use use_cases::UseCases;
pub use word_count::GetWordCount;
