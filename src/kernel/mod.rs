//! Headless application core (state/action/effect).

pub mod action;
pub mod bank;
pub mod effect;
pub mod services;
pub mod session;
pub mod state;
pub mod store;
pub mod validate;

pub use action::Action;
pub use effect::Effect;
pub use session::QuizSession;
pub use state::{
    AppState, AuthoringField, AuthoringState, FieldInput, QuestionView, ResultView, Screen,
    SignupState,
};
pub use store::{DispatchResult, Store};
pub use validate::{validate, ValidationError};
