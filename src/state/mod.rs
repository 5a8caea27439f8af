// src/state/mod.rs
pub mod detail_state;
pub mod list_state;
pub mod observable;

pub use detail_state::{CurrentNote, NoteDetailState};
pub use list_state::NoteListState;
pub use observable::Observable;
