use super::*;

#[test]
fn empty_object_parses_to_defaults() {
    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert!(settings.questions_file.is_none());
}

#[test]
fn questions_file_override_roundtrips() {
    let original = Settings {
        questions_file: Some(PathBuf::from("/tmp/my-questions.txt")),
    };
    let json = serde_json::to_string(&original).unwrap();
    let decoded: Settings = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded.questions_file, original.questions_file);
}

#[test]
fn defaults_serialize_to_an_empty_object() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert_eq!(json, "{}");
}

#[test]
fn unknown_keys_are_tolerated() {
    let settings: Settings =
        serde_json::from_str(r#"{"future_option": true, "questions_file": "q.txt"}"#).unwrap();
    assert_eq!(settings.questions_file, Some(PathBuf::from("q.txt")));
}
