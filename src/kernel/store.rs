//! The store owns the state; `dispatch` is the only way to change it.

mod authoring;
mod quiz;
mod signup;

use super::{Action, AppState, Effect, Screen};

/// What a dispatch produced: side effects for the caller to run, and whether
/// anything on screen could have changed.
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Quit => {
                self.state.should_quit = true;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::StartQuiz => {
                if self.state.screen != Screen::Welcome {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                self.state.signup.reset();
                self.state.notice = None;
                self.state.screen = Screen::Signup;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::CreateQuiz => {
                if self.state.screen != Screen::Welcome {
                    return DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                // The authoring form is not reset here: a draft left behind
                // with Done is still there on re-entry.
                self.state.notice = None;
                self.state.screen = Screen::Authoring;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::PersistFailed { message } => {
                let notice = format!("Error saving user questions: {message}");
                let prev = self.state.notice.replace(notice);
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: prev.as_deref() != self.state.notice.as_deref(),
                }
            }
            Action::SignupAppend(_)
            | Action::SignupBackspace
            | Action::SignupCursorLeft
            | Action::SignupCursorRight
            | Action::SignupSubmit => self.reduce_signup_action(action),
            Action::SelectOption { .. }
            | Action::CycleOption { .. }
            | Action::Advance
            | Action::Restart => self.reduce_quiz_action(action),
            Action::AuthoringAppend(_)
            | Action::AuthoringBackspace
            | Action::AuthoringCursorLeft
            | Action::AuthoringCursorRight
            | Action::FocusNextField
            | Action::FocusPrevField
            | Action::SubmitQuestion
            | Action::ClearForm
            | Action::FinishAuthoring => self.reduce_authoring_action(action),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
