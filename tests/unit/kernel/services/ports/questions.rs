use super::*;

fn question() -> Question {
    Question::new(
        "What is the capital of France?".to_string(),
        [
            "London".to_string(),
            "Paris".to_string(),
            "Berlin".to_string(),
            "Madrid".to_string(),
        ],
        1,
    )
    .unwrap()
}

#[test]
fn format_produces_six_pipe_separated_fields() {
    assert_eq!(
        format_record(&question()),
        "What is the capital of France?|London|Paris|Berlin|Madrid|1"
    );
}

#[test]
fn parse_rebuilds_the_question() {
    let parsed = parse_record("What is the capital of France?|London|Paris|Berlin|Madrid|1");
    assert_eq!(parsed, Some(question()));
}

#[test]
fn parse_rejects_wrong_field_counts() {
    assert_eq!(parse_record(""), None);
    assert_eq!(parse_record("just some text"), None);
    assert_eq!(parse_record("q|a|b|c|1"), None);
    assert_eq!(parse_record("q|a|b|c|d|1|extra"), None);
}

#[test]
fn parse_rejects_bad_correct_indices() {
    assert_eq!(parse_record("q|a|b|c|d|4"), None);
    assert_eq!(parse_record("q|a|b|c|d|-1"), None);
    assert_eq!(parse_record("q|a|b|c|d|x"), None);
    assert_eq!(parse_record("q|a|b|c|d|"), None);
}

#[test]
fn a_separator_inside_a_field_corrupts_the_record() {
    // Known limitation of the format: the extra field makes the line invalid.
    let question = Question::new(
        "Which is a pipe: | or -?".to_string(),
        [
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ],
        0,
    )
    .unwrap();

    assert_eq!(parse_record(&format_record(&question)), None);
}

#[test]
fn fields_keep_surrounding_whitespace() {
    let parsed = parse_record(" spaced |a|b|c|d|0").unwrap();
    assert_eq!(parsed.text(), " spaced ");
}
