//! Record codec for the flat questions file.
//!
//! One record per line, fields joined by `|`:
//!
//! ```text
//! text|option1|option2|option3|option4|correctIndex
//! ```
//!
//! There is no escaping; a `|` inside a field splits the record and the line
//! is dropped on the next load.

use std::fmt;
use std::io;

use crate::models::{Question, OPTION_COUNT};

pub const FIELD_SEPARATOR: &str = "|";

const RECORD_FIELDS: usize = OPTION_COUNT + 2;

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

pub fn format_record(question: &Question) -> String {
    let correct = question.correct().to_string();
    let mut fields: Vec<&str> = Vec::with_capacity(RECORD_FIELDS);
    fields.push(question.text());
    fields.extend(question.options().iter().map(String::as_str));
    fields.push(&correct);
    fields.join(FIELD_SEPARATOR)
}

/// Returns `None` for a line that does not split into exactly six fields
/// with an in-range correct index. Loaders skip such lines.
pub fn parse_record(line: &str) -> Option<Question> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != RECORD_FIELDS {
        return None;
    }

    let correct = fields[RECORD_FIELDS - 1].parse::<usize>().ok()?;
    Question::new(
        fields[0].to_string(),
        [
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            fields[4].to_string(),
        ],
        correct,
    )
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/questions.rs"]
mod tests;
