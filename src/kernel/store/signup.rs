use crate::kernel::session::QuizSession;
use crate::kernel::{Action, Screen};

const EMPTY_USERNAME_ERROR: &str = "Username cannot be empty.";

impl super::Store {
    pub(super) fn reduce_signup_action(&mut self, action: Action) -> super::DispatchResult {
        if self.state.screen != Screen::Signup {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        match action {
            Action::SignupAppend(ch) => {
                let field = &mut self.state.signup;
                field.error = None;
                if field.cursor > field.value.len() {
                    field.cursor = field.value.len();
                }
                field.value.insert(field.cursor, ch);
                field.cursor += ch.len_utf8();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SignupBackspace => {
                let field = &mut self.state.signup;
                if field.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                field.error = None;
                let prev = field.value[..field.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                field.value.drain(prev..field.cursor);
                field.cursor = prev;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SignupCursorLeft => {
                let field = &mut self.state.signup;
                if field.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                field.cursor = field.value[..field.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SignupCursorRight => {
                let field = &mut self.state.signup;
                let Some(next) = field.value[field.cursor..]
                    .chars()
                    .next()
                    .map(|ch| field.cursor + ch.len_utf8())
                else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                field.cursor = next;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SignupSubmit => {
                let username = self.state.signup.value.trim().to_string();
                if username.is_empty() {
                    let prev = self
                        .state
                        .signup
                        .error
                        .replace(EMPTY_USERNAME_ERROR.to_string());
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: prev.as_deref() != self.state.signup.error.as_deref(),
                    };
                }

                // The session copies the bank as it exists right now.
                self.state.signup.error = None;
                self.state.rebuild_bank();
                self.state.session = Some(QuizSession::start(username, &self.state.bank));
                self.state.screen = Screen::Quiz;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-signup action passed to reduce_signup_action"),
        }
    }
}
