// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod util;

use anyhow::{Context, Result};
use application::{NoteDataSource, NoteRepository, UseCases};
use cli::args::{Args, Command};
use domain::{DomainError, Note};
use infrastructure::config::{default_config_path, Config};
use infrastructure::SqliteNoteDataSource;
use ports::TextPresenter;
use state::{CurrentNote, NoteDetailState, NoteListState, Observable};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeeper with arguments");

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = Config::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    debug!(?config, "Loaded configuration");

    // Initialize infrastructure
    let database_path = match args.database {
        Some(path) => {
            debug!(?path, "Using provided database path");
            path
        }
        None => config.database_path()?,
    };
    let data_source = SqliteNoteDataSource::open(&database_path)
        .with_context(|| format!("Failed to open database {}", database_path.display()))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start worker runtime")?;

    // Initialize application and presentation
    let use_cases = UseCases::new(NoteRepository::new(data_source));
    let presenter = TextPresenter::new(&config.display);

    let output = execute(args.command, use_cases, &runtime, &presenter)?;
    print!("{}", output);
    Ok(())
}

/// Run one command through the state holders and return what to print
pub fn execute<D: NoteDataSource + 'static>(
    command: Command,
    use_cases: UseCases<D>,
    runtime: &Runtime,
    presenter: &TextPresenter,
) -> Result<String> {
    match command {
        Command::Add { title, content } => {
            let detail = NoteDetailState::new(use_cases, runtime.handle().clone());
            wait(runtime, detail.save(Note::new(title, content)), detail.error())?;
            let id = detail
                .current_note()
                .get()
                .note()
                .map(|n| n.id)
                .ok_or_else(|| DomainError::Execution("Saved note was not published".to_string()))?;
            info!(note_id = id, "Created note");
            Ok(format!("Created note {}\n", id))
        }
        Command::List { json } => {
            let list = NoteListState::new(use_cases, runtime.handle().clone());
            wait(runtime, list.refresh(), list.error())?;
            let notes = list.notes().get();
            if json {
                Ok(serde_json::to_string_pretty(&notes)? + "\n")
            } else {
                Ok(presenter.render_list(&notes))
            }
        }
        Command::View { note_id, json } => {
            let word_count = use_cases.get_word_count;
            let detail = NoteDetailState::new(use_cases, runtime.handle().clone());
            let mut note = load_existing(runtime, &detail, note_id)?;
            note.word_count = word_count.execute(&note);
            if json {
                Ok(serde_json::to_string_pretty(&note)? + "\n")
            } else {
                Ok(format!(
                    "{}\nWords: {}\n",
                    presenter.render_note(&note),
                    note.word_count
                ))
            }
        }
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            let detail = NoteDetailState::new(use_cases, runtime.handle().clone());
            let mut note = load_existing(runtime, &detail, note_id)?;
            if let Some(title) = title {
                note.title = title;
            }
            if let Some(content) = content {
                note.content = content;
            }
            wait(runtime, detail.save(note), detail.error())?;
            Ok(format!("Updated note {}\n", note_id))
        }
        Command::Delete { note_id } => {
            let detail = NoteDetailState::new(use_cases, runtime.handle().clone());
            let note = load_existing(runtime, &detail, note_id)?;
            wait(runtime, detail.delete(note), detail.error())?;
            info!(note_id, "Deleted note");
            Ok(format!("Deleted note {}\n", note_id))
        }
    }
}

/// Block the foreground until `task` finishes, surfacing any published failure
fn wait(
    runtime: &Runtime,
    task: JoinHandle<()>,
    error: &Observable<Option<DomainError>>,
) -> Result<(), DomainError> {
    runtime
        .block_on(task)
        .map_err(|e| DomainError::Execution(e.to_string()))?;
    match error.get() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn load_existing<D: NoteDataSource + 'static>(
    runtime: &Runtime,
    detail: &NoteDetailState<D>,
    note_id: i64,
) -> Result<Note, DomainError> {
    wait(runtime, detail.load(note_id), detail.error())?;
    match detail.current_note().get() {
        CurrentNote::Found(note) => Ok(note),
        CurrentNote::NotFound(id) => Err(DomainError::NoteNotFound(id)),
        CurrentNote::Unloaded => Err(DomainError::Execution(
            "Note load did not publish a result".to_string(),
        )),
    }
}
