#[cfg(feature = "tui")]
pub mod app;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
