// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the notes database (optional)
    #[arg(short, long, value_name = "DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Path to the config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new note
    Add {
        /// Note title
        #[arg(short, long)]
        title: String,

        /// Note content
        #[arg(short = 'b', long, default_value = "")]
        content: String,
    },

    /// List notes, most recently updated first
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the title and/or content of a note
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short = 'b', long)]
        content: Option<String>,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },
}
