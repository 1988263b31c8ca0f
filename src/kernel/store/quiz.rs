use crate::kernel::{Action, Screen};

impl super::Store {
    pub(super) fn reduce_quiz_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::SelectOption { index } => {
                if self.state.screen != Screen::Quiz {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                let Some(session) = self.state.session.as_mut() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: session.select(index),
                }
            }
            Action::CycleOption { delta } => {
                if self.state.screen != Screen::Quiz {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                let Some(session) = self.state.session.as_mut() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: session.cycle_selection(delta),
                }
            }
            Action::Advance => {
                if self.state.screen != Screen::Quiz {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }
                let Some(session) = self.state.session.as_mut() else {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                };

                let advanced = session.advance();
                if session.is_finished() {
                    self.state.screen = Screen::Result;
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: true,
                    };
                }
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: advanced,
                }
            }
            Action::Restart => {
                if self.state.screen != Screen::Result {
                    return super::DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    };
                }

                self.state.session = None;
                self.state.signup.reset();
                self.state.notice = None;
                self.state.screen = Screen::Welcome;
                super::DispatchResult {
                    effects: Vec::new(),
                    state_changed: true,
                }
            }
            _ => unreachable!("non-quiz action passed to reduce_quiz_action"),
        }
    }
}
