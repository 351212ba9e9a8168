// src/db.rs

use crate::error::{MemoError, Result};
use crate::humanize::normalize_date;
use crate::models::Memo;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// 获取数据库文件的标准路径 (~/.config/memos/memos.db)
pub fn get_db_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(MemoError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/memos/memos.db"))
}

/// 打开数据库连接, 必要时创建目录
pub fn open_connection(db_path: &Path) -> Result<Connection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Connection::open(db_path).map_err(MemoError::Sql)
}

/// 如果表不存在则创建
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS memos (
            id INTEGER PRIMARY KEY,
            kind TEXT NOT NULL,
            date TEXT NOT NULL,
            text TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_memos_kind_date ON memos (kind, date);",
    )?;
    Ok(())
}

/// 插入一条备忘录, 日期统一存为 YYYY-MM-DD
pub fn add_memo(conn: &Connection, memo: &Memo) -> Result<()> {
    if memo.text.trim().is_empty() {
        return Err(MemoError::InvalidInput("memo text is empty".to_string()));
    }
    let date = normalize_date(&memo.date)?;
    conn.execute(
        "INSERT INTO memos (kind, date, text) VALUES (?1, ?2, ?3)",
        params![memo.kind, date, memo.text],
    )?;
    Ok(())
}

/// 按日期倒序查询某一类备忘录
pub fn fetch_memos(conn: &Connection, kind: &str) -> Result<Vec<Memo>> {
    let mut stmt = conn.prepare(
        "SELECT kind, date, text FROM memos WHERE kind = ? ORDER BY date DESC, id DESC",
    )?;
    let memos = stmt
        .query_map([kind], |row| {
            Ok(Memo {
                kind: row.get(0)?,
                date: row.get(1)?,
                text: row.get(2)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(memos)
}

/// 删除所有 (kind, date, text) 完全匹配的备忘录, 返回删除条数
pub fn delete_memos(conn: &Connection, kind: &str, date: &str, text: &str) -> Result<usize> {
    // 无法解析的日期按原样匹配
    let date = normalize_date(date).unwrap_or_else(|_| date.to_string());
    let count = conn.execute(
        "DELETE FROM memos WHERE kind = ?1 AND date = ?2 AND text = ?3",
        params![kind, date, text],
    )?;
    Ok(count)
}

/// Process-wide handle over one SQLite connection.
///
/// The connection is not `Sync`, so access goes through a mutex that is held
/// for a single statement at a time.
pub struct MemoStore {
    conn: Mutex<Connection>,
}

impl MemoStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = open_connection(db_path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        initialize_schema(&conn)?;
        Ok(MemoStore {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| MemoError::StoreUnavailable(e.to_string()))
    }

    pub fn list_memos(&self, kind: &str) -> Result<Vec<Memo>> {
        fetch_memos(&*self.lock()?, kind)
    }

    pub fn insert_memo(&self, memo: &Memo) -> Result<()> {
        add_memo(&*self.lock()?, memo)
    }

    pub fn delete_memo(&self, kind: &str, date: &str, text: &str) -> Result<usize> {
        delete_memos(&*self.lock()?, kind, date, text)
    }
}
