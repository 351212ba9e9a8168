use memos::{Memo, MemoError, MemoStore, DATED_MEMO_KIND};
use tempfile::tempdir;

#[test]
fn list_sorts_by_date_descending() {
    let store = MemoStore::open_in_memory().unwrap();
    store
        .insert_memo(&Memo::dated("1970-01-01", "This is a test entry"))
        .unwrap();
    store
        .insert_memo(&Memo::dated("1999-12-31", "This is a sort test entry"))
        .unwrap();

    let memos = store.list_memos(DATED_MEMO_KIND).unwrap();
    assert_eq!(memos.len(), 2);
    assert_eq!(memos[0].text, "This is a sort test entry");
    assert_eq!(memos[1].text, "This is a test entry");
}

#[test]
fn delete_removes_only_exact_matches() {
    let store = MemoStore::open_in_memory().unwrap();
    store.insert_memo(&Memo::dated("2024-05-01", "keep me")).unwrap();
    store.insert_memo(&Memo::dated("2024-05-01", "drop me")).unwrap();
    store.insert_memo(&Memo::dated("2024-05-02", "drop me")).unwrap();

    let removed = store
        .delete_memo(DATED_MEMO_KIND, "2024-05-01", "drop me")
        .unwrap();
    assert_eq!(removed, 1);

    let memos = store.list_memos(DATED_MEMO_KIND).unwrap();
    assert_eq!(
        memos,
        vec![
            Memo::dated("2024-05-02", "drop me"),
            Memo::dated("2024-05-01", "keep me"),
        ]
    );
}

#[test]
fn delete_removes_every_duplicate() {
    let store = MemoStore::open_in_memory().unwrap();
    for _ in 0..3 {
        store.insert_memo(&Memo::dated("2024-05-01", "twin")).unwrap();
    }

    let removed = store.delete_memo(DATED_MEMO_KIND, "2024-05-01", "twin").unwrap();
    assert_eq!(removed, 3);
    assert!(store.list_memos(DATED_MEMO_KIND).unwrap().is_empty());
}

#[test]
fn delete_without_match_removes_nothing() {
    let store = MemoStore::open_in_memory().unwrap();
    store.insert_memo(&Memo::dated("2024-05-01", "stay")).unwrap();

    let removed = store.delete_memo(DATED_MEMO_KIND, "2024-05-01", "gone").unwrap();
    assert_eq!(removed, 0);
    assert_eq!(store.list_memos(DATED_MEMO_KIND).unwrap().len(), 1);
}

#[test]
fn insert_stores_utc_calendar_day() {
    let store = MemoStore::open_in_memory().unwrap();
    store
        .insert_memo(&Memo::dated("2024-05-01T23:30:00-02:00", "late"))
        .unwrap();

    let memos = store.list_memos(DATED_MEMO_KIND).unwrap();
    assert_eq!(memos[0].date, "2024-05-02");
}

#[test]
fn insert_rejects_unparseable_date() {
    let store = MemoStore::open_in_memory().unwrap();
    let err = store
        .insert_memo(&Memo::dated("next tuesday", "text"))
        .unwrap_err();
    assert!(matches!(err, MemoError::InvalidDate(_)));
}

#[test]
fn memos_persist_across_reopen() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("nested").join("memos.db");

    {
        let store = MemoStore::open(&db_path).unwrap();
        store.insert_memo(&Memo::dated("2024-05-01", "durable")).unwrap();
    }

    let store = MemoStore::open(&db_path).unwrap();
    let memos = store.list_memos(DATED_MEMO_KIND).unwrap();
    assert_eq!(memos, vec![Memo::dated("2024-05-01", "durable")]);
}

#[test]
fn insert_rejects_years_that_would_break_date_order() {
    let store = MemoStore::open_in_memory().unwrap();
    store.insert_memo(&Memo::dated("1999-12-31", "party")).unwrap();

    for date in ["+10000-01-01", "-0005-03-01"] {
        let err = store.insert_memo(&Memo::dated(date, "far")).unwrap_err();
        assert!(matches!(err, MemoError::InvalidDate(_)), "{date}");
    }
    store.insert_memo(&Memo::dated("9999-12-31", "last")).unwrap();
    store.insert_memo(&Memo::dated("0001-01-01", "first")).unwrap();

    let texts: Vec<_> = store
        .list_memos(DATED_MEMO_KIND)
        .unwrap()
        .into_iter()
        .map(|m| m.text)
        .collect();
    assert_eq!(texts, vec!["last", "party", "first"]);
}
