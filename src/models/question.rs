//! A single multiple-choice question.

/// Every question carries exactly four answer options.
pub const OPTION_COUNT: usize = 4;

/// An immutable question: text, four options, and the index of the correct
/// option. Construction is the only place the index is validated, so a
/// `Question` in hand is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct: usize,
}

impl Question {
    /// Returns `None` when `correct` is not a valid option index.
    pub fn new(text: String, options: [String; OPTION_COUNT], correct: usize) -> Option<Self> {
        if correct >= OPTION_COUNT {
            return None;
        }
        Some(Self {
            text,
            options,
            correct,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/question.rs"]
mod tests;
