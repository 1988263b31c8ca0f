use super::*;
use crate::kernel::services::ports::questions::StoreError;
use std::fs;
use tempfile::tempdir;

fn question(text: &str) -> Question {
    Question::new(
        text.to_string(),
        [
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ],
        2,
    )
    .unwrap()
}

#[test]
fn loading_a_missing_file_yields_an_empty_library() {
    let dir = tempdir().unwrap();
    let store = QuestionFile::new(dir.path().join("questions.txt"));
    assert_eq!(store.load().unwrap(), Vec::new());
}

#[test]
fn saved_questions_come_back_in_order() {
    let dir = tempdir().unwrap();
    let store = QuestionFile::new(dir.path().join("questions.txt"));
    let questions = vec![question("first"), question("second")];

    store.save(&questions).unwrap();
    assert_eq!(store.load().unwrap(), questions);
}

#[test]
fn saving_replaces_the_previous_contents() {
    let dir = tempdir().unwrap();
    let store = QuestionFile::new(dir.path().join("questions.txt"));

    store.save(&[question("old")]).unwrap();
    store.save(&[question("new")]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text(), "new");
}

#[test]
fn save_does_not_leave_a_temp_file_behind() {
    let dir = tempdir().unwrap();
    let store = QuestionFile::new(dir.path().join("questions.txt"));
    store.save(&[question("only")]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["questions.txt".to_string()]);
}

#[test]
fn malformed_and_blank_lines_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("questions.txt");
    fs::write(
        &path,
        "good|a|b|c|d|0\n\nnot a record\nbad-index|a|b|c|d|9\nalso good|a|b|c|d|3\n",
    )
    .unwrap();

    let loaded = QuestionFile::new(path).load().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].text(), "good");
    assert_eq!(loaded[1].text(), "also good");
}

#[test]
fn save_fails_when_the_directory_is_gone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("questions.txt");

    let err = QuestionFile::new(path).save(&[question("q")]).unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn windows_line_endings_still_parse() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("questions.txt");
    fs::write(&path, "crlf|a|b|c|d|1\r\n").unwrap();

    let loaded = QuestionFile::new(path).load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].text(), "crlf");
}
