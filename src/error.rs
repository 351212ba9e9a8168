// src/error.rs

use crate::humanize::DateParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MemoError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateParseError),

    #[error("Memo store is unavailable: {0}")]
    StoreUnavailable(String),
}

pub type Result<T> = std::result::Result<T, MemoError>;
