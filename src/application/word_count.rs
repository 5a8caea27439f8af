// src/application/word_count.rs
use crate::domain::Note;

/// Word count of a note: title and content counted independently and summed.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetWordCount;

impl GetWordCount {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, note: &Note) -> usize {
        count_words(&note.title) + count_words(&note.content)
    }
}

/// Count tokens separated by ' ' or '\n' that contain at least one ASCII letter.
///
/// Only space and newline split; a tab stays inside its token. Empty tokens
/// produced by leading, trailing or repeated separators carry no letter and
/// are discarded, so an empty field counts 0.
pub fn count_words(text: &str) -> usize {
    text.split([' ', '\n'])
        .filter(|token| token.chars().any(|c| c.is_ascii_alphabetic()))
        .count()
}
