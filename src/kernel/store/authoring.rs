use crate::kernel::validate::validate;
use crate::kernel::{Action, AuthoringState, Effect, Screen};

const LIBRARY_EMPTY_ERROR: &str = "Please add at least one question before finishing.";

impl super::Store {
    pub(super) fn reduce_authoring_action(&mut self, action: Action) -> super::DispatchResult {
        if self.state.screen != Screen::Authoring {
            return super::DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        }

        match action {
            Action::AuthoringAppend(ch) => {
                self.state.authoring.error = None;
                let field = self.state.authoring.focused_mut();
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
            Action::AuthoringBackspace => {
                let field = self.state.authoring.focused_mut();
                if field.cursor == 0 {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                let prev = field.value[..field.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                field.value.drain(prev..field.cursor);
                field.cursor = prev;
                self.state.authoring.error = None;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::AuthoringCursorLeft => {
                let field = self.state.authoring.focused_mut();
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
            Action::AuthoringCursorRight => {
                let field = self.state.authoring.focused_mut();
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
            Action::FocusNextField => {
                self.state.authoring.focus = self.state.authoring.focus.next();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::FocusPrevField => {
                self.state.authoring.focus = self.state.authoring.focus.prev();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            Action::SubmitQuestion => {
                let options = [
                    self.state.authoring.options[0].value.clone(),
                    self.state.authoring.options[1].value.clone(),
                    self.state.authoring.options[2].value.clone(),
                    self.state.authoring.options[3].value.clone(),
                ];
                let outcome = validate(
                    &self.state.authoring.question.value,
                    &options,
                    &self.state.authoring.correct.value,
                    &self.state.library,
                );

                match outcome {
                    Ok(question) => {
                        // The new question is kept in memory whether or not
                        // the save that follows succeeds.
                        self.state.library.push(question);
                        self.state.authoring.reset();
                        self.state.notice = Some(format!(
                            "Question added! Total custom questions: {}",
                            self.state.library.len()
                        ));
                        super::DispatchResult {
                            effects: vec![Effect::PersistLibrary {
                                questions: self.state.library.clone(),
                            }],
                            state_changed: true,
                        }
                    }
                    Err(err) => {
                        let notice_cleared = self.state.notice.take().is_some();
                        let prev = self.state.authoring.error.replace(err.to_string());
                        super::DispatchResult {
                            effects: Vec::new(),
                            state_changed: notice_cleared
                                || prev.as_deref() != self.state.authoring.error.as_deref(),
                        }
                    }
                }
            }
            Action::ClearForm => {
                let changed = self.state.authoring != AuthoringState::default();
                self.state.authoring.reset();
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::FinishAuthoring => {
                if self.state.library.is_empty() {
                    let prev = self
                        .state
                        .authoring
                        .error
                        .replace(LIBRARY_EMPTY_ERROR.to_string());
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: prev.as_deref() != self.state.authoring.error.as_deref(),
                    };
                }

                // The form is left as it is; a half-written draft survives
                // leaving and re-entering the authoring screen.
                self.state.notice = None;
                self.state.rebuild_bank();
                self.state.screen = Screen::Welcome;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-authoring action passed to reduce_authoring_action"),
        }
    }
}
