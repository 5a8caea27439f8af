// src/ports/text.rs
use crate::domain::Note;
use crate::infrastructure::config::DisplayConfig;
use crate::util::text::preview;
use chrono::{DateTime, Local};
use std::fmt::Write;
use tracing::instrument;

/// Renders notes as plain text for the terminal
#[derive(Debug, Clone)]
pub struct TextPresenter {
    date_format: String,
    preview_width: usize,
}

impl TextPresenter {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            date_format: display.date_format.clone(),
            preview_width: display.preview_width,
        }
    }

    fn format_time(&self, millis: i64) -> String {
        let Some(utc) = DateTime::from_timestamp_millis(millis) else {
            return "-".to_string();
        };
        // an unrenderable format makes Display fail instead of producing text
        let mut out = String::new();
        match write!(out, "{}", utc.with_timezone(&Local).format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => "-".to_string(),
        }
    }

    /// One block per note: id and title, content preview, date and word count
    #[instrument(level = "trace", skip(self, notes), fields(count = notes.len()))]
    pub fn render_list(&self, notes: &[Note]) -> String {
        if notes.is_empty() {
            return "No notes.\n".to_string();
        }

        let mut out = String::new();
        for note in notes {
            let title = preview(&note.title, self.preview_width);
            let _ = writeln!(out, "[{}] {}", note.id, title);
            let content = preview(&note.content, self.preview_width);
            if !content.is_empty() {
                let _ = writeln!(out, "    {}", content);
            }
            let _ = writeln!(
                out,
                "    Last updated: {} | Words: {}",
                self.format_time(note.update_time),
                note.word_count
            );
        }
        out
    }

    pub fn render_note(&self, note: &Note) -> String {
        format!(
            "[{}] {}\nCreated: {}\nLast updated: {}\n\n{}\n",
            note.id,
            note.title,
            self.format_time(note.creation_time),
            self.format_time(note.update_time),
            note.content
        )
    }
}
