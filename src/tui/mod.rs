//! TUI integration layer (crossterm + ratatui).
//!
//! Kept separate from `kernel`/`models` so the core stays free of terminal
//! crates and can be driven headless in tests.

pub mod terminal_guard;

pub use terminal_guard::{RestoreHandle, TerminalGuard, TerminationSignal};
#[cfg(unix)]
pub use terminal_guard::watch_termination;
