// src/cli.rs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "memos - keep a simple list of dated memoranda",
    long_about = "memos stores short notes with a date attached and shows them newest first, with dates rendered as \"Today\", \"Tomorrow\", \"in 2 week(s)\" and so on. Run `memos serve` for the web app, or use the other subcommands from the terminal."
)]
pub struct Cli {
    /// Path of the database file. Defaults to "~/.config/memos/memos.db".
    #[arg(long, global = true, env = "MEMOS_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, global = true, env = "MEMOS_DEBUG")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Runs the web app.
    Serve {
        #[arg(long, env = "MEMOS_HOST", default_value = "0.0.0.0")]
        host: String,
        #[arg(short, long, env = "MEMOS_PORT", default_value_t = 5000)]
        port: u16,
    },

    /// Creates the database if it does not exist yet.
    Init,

    /// Adds a dated memo.
    Add {
        #[arg(short = 'm', long, help = "Text of the memo")]
        text: String,
        #[arg(short, long, help = "Date of the memo (format: YYYY-MM-DD)")]
        date: String,
    },

    /// Lists memos, latest date first.
    List {
        #[arg(short, long, help = "Show at most N memos")]
        num: Option<usize>,
    },

    /// Deletes every memo with exactly this date and text.
    Del {
        #[arg(short = 'm', long, help = "Text of the memo to delete")]
        text: String,
        #[arg(short, long, help = "Date of the memo to delete (format: YYYY-MM-DD)")]
        date: String,
        #[arg(short, long, help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
