//! Validation of authored questions, applied before anything is stored.

use std::fmt;

use crate::models::{Question, OPTION_COUNT};

/// Rejections are checked in a fixed order: question text, options, correct
/// index, duplicate. The first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyQuestion,
    EmptyOption,
    InvalidCorrectOption,
    DuplicateQuestion,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ValidationError::EmptyQuestion => "Question text cannot be empty",
            ValidationError::EmptyOption => "All options must be filled",
            ValidationError::InvalidCorrectOption => {
                "Correct option must be a number between 1 and 4"
            }
            ValidationError::DuplicateQuestion => "This question already exists",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the raw form values and builds the question from their trimmed
/// versions. `correct` is the 1-based index the user typed; the duplicate
/// check is case-insensitive and runs against the user library only, so a
/// builtin question can still be re-authored.
pub fn validate(
    text: &str,
    options: &[String; OPTION_COUNT],
    correct: &str,
    library: &[Question],
) -> Result<Question, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyQuestion);
    }

    let mut trimmed: [&str; OPTION_COUNT] = [""; OPTION_COUNT];
    for (slot, option) in trimmed.iter_mut().zip(options.iter()) {
        let option = option.trim();
        if option.is_empty() {
            return Err(ValidationError::EmptyOption);
        }
        *slot = option;
    }

    let correct = correct
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|entered| entered.checked_sub(1))
        .filter(|index| (0..OPTION_COUNT as i64).contains(index))
        .ok_or(ValidationError::InvalidCorrectOption)? as usize;

    let lowered = text.to_lowercase();
    if library
        .iter()
        .any(|existing| existing.text().to_lowercase() == lowered)
    {
        return Err(ValidationError::DuplicateQuestion);
    }

    Question::new(text.to_string(), trimmed.map(String::from), correct)
        .ok_or(ValidationError::InvalidCorrectOption)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/validate.rs"]
mod tests;
