//! Flat-file storage for the user question library.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::kernel::services::ports::questions::{format_record, parse_record, Result};
use crate::models::Question;

const DEFAULT_FILE: &str = "questions.txt";

/// Loads and saves the library as one record per line. Saves go through a
/// sibling temp file followed by a rename, so a crash mid-write leaves the
/// previous contents intact.
#[derive(Debug, Clone)]
pub struct QuestionFile {
    path: PathBuf,
}

impl QuestionFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `questions.txt` in the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty library, not an error. Lines that do not
    /// parse are skipped with a warning; the rest still load.
    pub fn load(&self) -> Result<Vec<Question>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut questions = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            // Tolerate files written with CRLF line endings.
            let record = line.trim_end_matches('\r');
            match parse_record(record) {
                Some(question) => questions.push(question),
                None if record.trim().is_empty() => {}
                None => {
                    tracing::warn!(
                        path = %self.path.display(),
                        line = %record,
                        "skipping malformed question record"
                    );
                }
            }
        }
        Ok(questions)
    }

    pub fn save(&self, questions: &[Question]) -> Result<()> {
        let tmp = self.tmp_path();
        {
            let mut file = File::create(&tmp)?;
            for question in questions {
                writeln!(file, "{}", format_record(question))?;
            }
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/question_file.rs"]
mod tests;
