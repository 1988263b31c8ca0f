//! Terminal front end: owns the store, runs effects, routes input, renders.

mod input;
mod render;
mod theme;

pub use theme::UiTheme;

use crate::kernel::services::adapters::QuestionFile;
use crate::kernel::{Action, AppState, Effect, Store};

pub struct App {
    store: Store,
    theme: UiTheme,
    question_file: QuestionFile,
}

impl App {
    pub fn new(state: AppState, question_file: QuestionFile) -> Self {
        Self {
            store: Store::new(state),
            theme: UiTheme::default(),
            question_file,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().should_quit
    }

    pub fn handle_event(&mut self, event: &crossterm::event::Event) {
        if let Some(action) = input::action_for_event(self.store.state(), event) {
            self.dispatch(action);
        }
    }

    pub fn render(&self, frame: &mut ratatui::Frame) {
        render::render(self, frame);
    }

    fn dispatch(&mut self, action: Action) {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
    }

    /// Effects run outside the reducers. A failed save is reported back into
    /// the state so the user sees it; the in-memory library stays as it is.
    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PersistLibrary { questions } => {
                match self.question_file.save(&questions) {
                    Ok(()) => {
                        tracing::debug!(count = questions.len(), "saved user questions");
                    }
                    Err(err) => {
                        tracing::error!(
                            error = %err,
                            path = %self.question_file.path().display(),
                            "failed to save user questions"
                        );
                        self.dispatch(Action::PersistFailed {
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
    }
}
