use super::*;

fn options() -> [String; OPTION_COUNT] {
    [
        "London".to_string(),
        "Paris".to_string(),
        "Berlin".to_string(),
        "Madrid".to_string(),
    ]
}

#[test]
fn new_accepts_every_valid_index() {
    for correct in 0..OPTION_COUNT {
        let question = Question::new("capital?".to_string(), options(), correct);
        assert_eq!(question.map(|q| q.correct()), Some(correct));
    }
}

#[test]
fn new_rejects_out_of_range_index() {
    assert!(Question::new("capital?".to_string(), options(), OPTION_COUNT).is_none());
    assert!(Question::new("capital?".to_string(), options(), usize::MAX).is_none());
}

#[test]
fn is_correct_matches_only_the_stored_index() {
    let question = Question::new("capital?".to_string(), options(), 1).unwrap();
    assert!(question.is_correct(1));
    assert!(!question.is_correct(0));
    assert!(!question.is_correct(4));
}

#[test]
fn option_returns_none_past_the_end() {
    let question = Question::new("capital?".to_string(), options(), 0).unwrap();
    assert_eq!(question.option(1), Some("Paris"));
    assert_eq!(question.option(4), None);
}
