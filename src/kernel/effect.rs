use crate::models::Question;

#[derive(Debug, Clone)]
pub enum Effect {
    /// Write the full user library to the questions file.
    PersistLibrary { questions: Vec<Question> },
}
