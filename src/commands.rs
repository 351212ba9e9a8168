// src/commands.rs

use crate::db::{self, MemoStore};
use crate::error::Result;
use crate::humanize::humanize_local;
use crate::models::{Memo, DATED_MEMO_KIND};
use crate::server::{self, AppState};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// 解析数据库路径: 命令行参数优先, 否则使用默认路径
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    match db {
        Some(path) => Ok(path),
        None => db::get_db_path(),
    }
}

/// 处理 'serve' 命令
pub async fn handle_serve(db_path: &Path, host: &str, port: u16) -> Result<()> {
    let store = match MemoStore::open(db_path) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failure opening database at {}: {}", db_path.display(), e);
            return Err(e);
        }
    };
    tracing::info!("Using database at {}", db_path.display());
    server::run_server(AppState::new(store), host, port).await
}

/// 处理 'init' 命令
pub fn handle_init(db_path: &Path) -> Result<()> {
    MemoStore::open(db_path)?;
    println!("✓ Database initialized successfully at: {:?}", db_path);
    Ok(())
}

/// 处理 'add' 命令
pub fn handle_add(db_path: &Path, text: String, date: String) -> Result<()> {
    let store = MemoStore::open(db_path)?;
    store.insert_memo(&Memo::dated(date, text))?;
    println!("✓ Memo recorded.");
    Ok(())
}

/// 处理 'list' 命令
pub fn handle_list(db_path: &Path, num: Option<usize>) -> Result<()> {
    let store = MemoStore::open(db_path)?;
    let memos = store.list_memos(DATED_MEMO_KIND)?;

    if memos.is_empty() {
        println!("No memos found.");
        return Ok(());
    }

    let limit = num.unwrap_or(memos.len());
    for memo in memos.iter().take(limit) {
        println!("{} ({})", humanize_local(&memo.date), memo.date);
        println!("{}", memo.text.trim_end());
        println!("{}", "─".repeat(40));
    }
    Ok(())
}

/// 处理 'del' 命令
pub fn handle_del(db_path: &Path, text: String, date: String, yes: bool) -> Result<()> {
    let store = MemoStore::open(db_path)?;

    if !yes {
        print!("Delete every memo dated {} reading {:?}? (y/N): ", date, text);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let count = store.delete_memo(DATED_MEMO_KIND, &date, &text)?;
    println!("✓ Deleted {} memo(s).", count);
    Ok(())
}
