#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Welcome
    StartQuiz,
    CreateQuiz,
    Quit,

    // Signup
    SignupAppend(char),
    SignupBackspace,
    SignupCursorLeft,
    SignupCursorRight,
    SignupSubmit,

    // Quiz
    SelectOption {
        index: usize,
    },
    CycleOption {
        delta: isize,
    },
    Advance,
    Restart,

    // Authoring
    AuthoringAppend(char),
    AuthoringBackspace,
    AuthoringCursorLeft,
    AuthoringCursorRight,
    FocusNextField,
    FocusPrevField,
    SubmitQuestion,
    ClearForm,
    FinishAuthoring,

    // Reported by the effect runner when a save did not reach disk.
    PersistFailed {
        message: String,
    },
}
