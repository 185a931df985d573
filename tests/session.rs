//! Session tests - open, save, modified tracking

mod common;

use std::fs;

use common::{insert, test_session};
use encoding_rs::{GBK, UTF_8, WINDOWS_1252};
use tempfile::TempDir;
use termedit::editable::{EditCommand, MoveTarget, Position};
use termedit::util::FileOpenError;

#[test]
fn test_open_loads_file_and_resets_state() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "line one\nline two").unwrap();

    let mut session = test_session();
    session.execute(insert("draft")).unwrap();
    session.open(&path, None).unwrap();

    assert_eq!(session.state().full_text(), "line one\nline two");
    assert_eq!(session.state().caret(), Position::zero());
    assert!(!session.state().can_undo());
    assert!(!session.is_modified());
    assert_eq!(session.file_path(), Some(path.as_path()));
}

#[test]
fn test_save_writes_full_text() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "abc").unwrap();

    let mut session = test_session();
    session.open(&path, None).unwrap();
    session
        .execute(EditCommand::Move {
            target: MoveTarget::DocumentEnd,
            extend: false,
        })
        .unwrap();
    session.execute(insert("\ndef")).unwrap();
    assert!(session.is_modified());

    let saved = session.save().unwrap();
    assert_eq!(saved, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), "abc\ndef");
    assert!(!session.is_modified());
    // History survives a save
    assert!(session.state().can_undo());
}

#[test]
fn test_save_preserves_crlf() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("windows.txt");
    fs::write(&path, "a\r\nb\r\n").unwrap();

    let mut session = test_session();
    session.open(&path, None).unwrap();
    session.execute(insert("x")).unwrap();
    session.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "xa\r\nb\r\n");
}

#[test]
fn test_save_as_rebinds_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.txt");

    let mut session = test_session();
    session.execute(insert("fresh")).unwrap();
    assert_eq!(session.display_name(), "[Untitled] *");

    session.save_as(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    assert_eq!(session.file_path(), Some(path.as_path()));
    assert_eq!(session.display_name(), "new.txt");
}

#[test]
fn test_failed_save_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    let bad_path = dir.path().join("missing-dir").join("out.txt");

    let mut session = test_session();
    session.execute(insert("keep me")).unwrap();

    let err = session.save_as(&bad_path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to write"));

    assert_eq!(session.state().full_text(), "keep me");
    assert!(session.is_modified());
    assert_eq!(session.file_path(), None);
    assert!(session.state().can_undo());
}

#[test]
fn test_failed_open_leaves_state_untouched() {
    let dir = TempDir::new().unwrap();
    let binary = dir.path().join("data.bin");
    fs::write(&binary, b"\x00\x01\x02").unwrap();

    let mut session = test_session();
    session.execute(insert("current")).unwrap();

    assert_eq!(session.open(&binary, None), Err(FileOpenError::BinaryFile));
    assert_eq!(
        session.open(&dir.path().join("nope.txt"), None),
        Err(FileOpenError::NotFound)
    );
    assert_eq!(session.open(dir.path(), None), Err(FileOpenError::IsDirectory));

    assert_eq!(session.state().full_text(), "current");
    assert!(session.is_modified());
    assert!(session.state().can_undo());
}

#[test]
fn test_open_gbk_file_and_save_as_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.txt");
    // "你好" in GBK
    fs::write(&path, [0xC4, 0xE3, 0xBA, 0xC3]).unwrap();

    let mut session = test_session();
    session.open(&path, None).unwrap();
    assert_eq!(session.state().full_text(), "你好");
    assert_eq!(session.encoding(), GBK);
    assert!(!session.is_modified());

    session.save().unwrap();
    assert_eq!(fs::read(&path).unwrap(), "你好".as_bytes());
    assert_eq!(session.encoding(), UTF_8);
}

#[test]
fn test_open_with_explicit_encoding() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin.txt");
    fs::write(&path, [b'n', 0xE9, b'e']).unwrap();

    let mut session = test_session();
    session.execute(insert("current")).unwrap();

    // Forcing UTF-8 refuses the file and keeps the document
    assert_eq!(
        session.open(&path, Some(UTF_8)),
        Err(FileOpenError::InvalidEncoding("UTF-8".to_string()))
    );
    assert_eq!(session.state().full_text(), "current");

    session.open(&path, Some(WINDOWS_1252)).unwrap();
    assert_eq!(session.state().full_text(), "née");
    assert_eq!(session.encoding(), WINDOWS_1252);
}

#[test]
fn test_open_or_create_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("later.txt");

    let mut session = test_session();
    session.open_or_create(&path, None).unwrap();

    assert_eq!(session.state().full_text(), "");
    assert_eq!(session.file_path(), Some(path.as_path()));
    assert!(!path.exists());

    session.execute(insert("created")).unwrap();
    session.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "created");
}

#[test]
fn test_undo_after_open_does_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "loaded").unwrap();

    let mut session = test_session();
    session.execute(insert("old")).unwrap();
    session.open(&path, None).unwrap();

    assert!(!session.execute(EditCommand::Undo).unwrap());
    assert_eq!(session.state().full_text(), "loaded");
    assert!(!session.is_modified());
}

#[test]
fn test_status_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");

    let mut session = test_session();
    session.execute(insert("abc")).unwrap();
    session.save_as(&path).unwrap();
    session.execute(insert(" def")).unwrap();

    assert_eq!(
        session.status().to_string(),
        "Ln 1, Col 8 | 2 words | notes.txt *"
    );
}
