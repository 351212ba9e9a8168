// src/models.rs

use serde::Serialize;

/// Discriminator used by the web app for every memo it stores.
pub const DATED_MEMO_KIND: &str = "dated_memo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Memo {
    pub kind: String,
    pub date: String, // ISO-8601 日期字符串 (YYYY-MM-DD)
    pub text: String,
}

impl Memo {
    pub fn dated(date: impl Into<String>, text: impl Into<String>) -> Self {
        Memo {
            kind: DATED_MEMO_KIND.to_string(),
            date: date.into(),
            text: text.into(),
        }
    }
}
