use crate::kernel::bank;
use crate::kernel::session::QuizSession;
use crate::models::{Question, OPTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Signup,
    Quiz,
    Result,
    Authoring,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupState {
    pub value: String,
    /// Byte offset into `value`, always on a char boundary.
    pub cursor: usize,
    pub error: Option<String>,
}

impl SignupState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One editable text field of the authoring form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    pub value: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthoringField {
    Question,
    Option1,
    Option2,
    Option3,
    Option4,
    Correct,
}

impl AuthoringField {
    pub const ALL: [AuthoringField; 6] = [
        AuthoringField::Question,
        AuthoringField::Option1,
        AuthoringField::Option2,
        AuthoringField::Option3,
        AuthoringField::Option4,
        AuthoringField::Correct,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AuthoringField::Question => "Question",
            AuthoringField::Option1 => "Option 1",
            AuthoringField::Option2 => "Option 2",
            AuthoringField::Option3 => "Option 3",
            AuthoringField::Option4 => "Option 4",
            AuthoringField::Correct => "Correct Option (1-4)",
        }
    }

    pub fn index(self) -> usize {
        match self {
            AuthoringField::Question => 0,
            AuthoringField::Option1 => 1,
            AuthoringField::Option2 => 2,
            AuthoringField::Option3 => 3,
            AuthoringField::Option4 => 4,
            AuthoringField::Correct => 5,
        }
    }

    pub fn next(self) -> Self {
        match self {
            AuthoringField::Question => AuthoringField::Option1,
            AuthoringField::Option1 => AuthoringField::Option2,
            AuthoringField::Option2 => AuthoringField::Option3,
            AuthoringField::Option3 => AuthoringField::Option4,
            AuthoringField::Option4 => AuthoringField::Correct,
            AuthoringField::Correct => AuthoringField::Question,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            AuthoringField::Question => AuthoringField::Correct,
            AuthoringField::Option1 => AuthoringField::Question,
            AuthoringField::Option2 => AuthoringField::Option1,
            AuthoringField::Option3 => AuthoringField::Option2,
            AuthoringField::Option4 => AuthoringField::Option3,
            AuthoringField::Correct => AuthoringField::Option4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthoringState {
    pub question: FieldInput,
    pub options: [FieldInput; OPTION_COUNT],
    pub correct: FieldInput,
    pub focus: AuthoringField,
    pub error: Option<String>,
}

impl Default for AuthoringState {
    fn default() -> Self {
        Self {
            question: FieldInput::default(),
            options: Default::default(),
            correct: FieldInput::default(),
            focus: AuthoringField::Question,
            error: None,
        }
    }
}

impl AuthoringState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn field(&self, field: AuthoringField) -> &FieldInput {
        match field {
            AuthoringField::Question => &self.question,
            AuthoringField::Option1 => &self.options[0],
            AuthoringField::Option2 => &self.options[1],
            AuthoringField::Option3 => &self.options[2],
            AuthoringField::Option4 => &self.options[3],
            AuthoringField::Correct => &self.correct,
        }
    }

    pub fn field_mut(&mut self, field: AuthoringField) -> &mut FieldInput {
        match field {
            AuthoringField::Question => &mut self.question,
            AuthoringField::Option1 => &mut self.options[0],
            AuthoringField::Option2 => &mut self.options[1],
            AuthoringField::Option3 => &mut self.options[2],
            AuthoringField::Option4 => &mut self.options[3],
            AuthoringField::Correct => &mut self.correct,
        }
    }

    pub fn focused_mut(&mut self) -> &mut FieldInput {
        self.field_mut(self.focus)
    }
}

/// Read-only projection of the question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position within the session.
    pub ordinal: usize,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub selected: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub username: String,
    pub score: u32,
    pub total: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,
    pub signup: SignupState,
    pub authoring: AuthoringState,
    pub session: Option<QuizSession>,
    /// User-authored questions, in insertion order.
    pub library: Vec<Question>,
    /// Builtin questions followed by the library.
    pub bank: Vec<Question>,
    /// One-line status shown at the bottom of the screen.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(library: Vec<Question>) -> Self {
        let bank = bank::assemble(bank::builtin_questions(), &library);
        Self {
            screen: Screen::Welcome,
            signup: SignupState::default(),
            authoring: AuthoringState::default(),
            session: None,
            library,
            bank,
            notice: None,
            should_quit: false,
        }
    }

    /// The bank is rebuilt wholesale, never patched in place. Sessions hold
    /// their own copy, so a rebuild never disturbs a quiz in flight.
    pub fn rebuild_bank(&mut self) {
        self.bank = bank::assemble(bank::builtin_questions(), &self.library);
    }

    pub fn question_view(&self) -> Option<QuestionView> {
        let session = self.session.as_ref()?;
        let question = session.current_question()?;
        Some(QuestionView {
            ordinal: session.current_index() + 1,
            text: question.text().to_string(),
            options: question.options().clone(),
            selected: session.selected(),
        })
    }

    pub fn result_view(&self) -> Option<ResultView> {
        let session = self.session.as_ref()?;
        Some(ResultView {
            username: session.username().to_string(),
            score: session.score(),
            total: session.total(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
