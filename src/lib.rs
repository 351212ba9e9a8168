//! Dated memoranda: a small web app and CLI over an SQLite store.

pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod handlers;
pub mod humanize;
pub mod logging;
pub mod models;
pub mod server;
pub mod templates;

pub use db::MemoStore;
pub use error::{MemoError, Result};
pub use humanize::{humanize, try_humanize, DateParseError, RelativeLabel};
pub use models::{Memo, DATED_MEMO_KIND};
pub use server::{build_router, AppState};
