// src/constants.rs
//
// Application-wide constants.

/// Directory under the platform config/data dirs holding notekeeper files.
pub const APP_DIR_NAME: &str = "notekeeper";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Database file name inside the data directory.
pub const DATABASE_FILE_NAME: &str = "notes.db";

/// SQLite schema version, stored in `PRAGMA user_version`.
///
/// Used in: `infrastructure/sqlite.rs`
pub const SCHEMA_VERSION: i64 = 1;
