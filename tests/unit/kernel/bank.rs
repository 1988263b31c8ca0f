use super::*;
use crate::models::Question;

fn user_question(text: &str) -> Question {
    Question::new(
        text.to_string(),
        [
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ],
        0,
    )
    .unwrap()
}

#[test]
fn builtins_are_three_well_formed_questions() {
    let builtins = builtin_questions();
    assert_eq!(builtins.len(), 3);
    assert_eq!(builtins[0].text(), "What is the capital of France?");
    assert!(builtins[0].is_correct(1));
}

#[test]
fn assemble_keeps_builtins_before_library_in_insertion_order() {
    let library = vec![user_question("first"), user_question("second")];
    let bank = assemble(builtin_questions(), &library);

    assert_eq!(bank.len(), 5);
    assert_eq!(bank[3].text(), "first");
    assert_eq!(bank[4].text(), "second");
}

#[test]
fn assemble_with_empty_library_is_just_the_builtins() {
    let bank = assemble(builtin_questions(), &[]);
    assert_eq!(bank.len(), 3);
}
