// src/infrastructure/mod.rs
pub mod config;
pub mod memory;
pub mod sqlite;

pub use config::Config;
pub use memory::InMemoryNoteDataSource;
pub use sqlite::SqliteNoteDataSource;
