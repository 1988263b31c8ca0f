pub mod question;

pub use question::{Question, OPTION_COUNT};
