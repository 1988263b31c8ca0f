//! Assembly of the question bank: builtins first, then the user library.

use crate::models::{Question, OPTION_COUNT};

pub fn builtin_questions() -> Vec<Question> {
    [
        builtin(
            "What is the capital of France?",
            ["London", "Paris", "Berlin", "Madrid"],
            1,
        ),
        builtin(
            "Which algorithm has O(n log n) average time complexity?",
            ["Bubble Sort", "Quick Sort", "Selection Sort", "Insertion Sort"],
            1,
        ),
        builtin(
            "What does HTML stand for?",
            [
                "Hyper Text Markup Language",
                "High Tech Modern Language",
                "Home Tool Markup Language",
                "Hyperlinks and Text Markup Language",
            ],
            0,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn assemble(builtins: Vec<Question>, library: &[Question]) -> Vec<Question> {
    let mut bank = builtins;
    bank.extend(library.iter().cloned());
    bank
}

fn builtin(text: &str, options: [&str; OPTION_COUNT], correct: usize) -> Option<Question> {
    Question::new(text.to_string(), options.map(String::from), correct)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/bank.rs"]
mod tests;
