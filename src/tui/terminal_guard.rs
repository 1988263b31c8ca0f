use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Raw-mode and alternate-screen switching, swappable for tests.
pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenOps for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
    }

    fn leave(&self) -> io::Result<()> {
        // Run both steps even if the first fails, then report the first error.
        let raw = crossterm::terminal::disable_raw_mode();
        let screen = crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        raw.and(screen)
    }
}

struct RestoreState {
    done: AtomicBool,
    ops: Box<dyn ScreenOps>,
}

/// Cloneable handle that leaves the alternate screen exactly once, no matter
/// how many copies call it or from which thread.
#[derive(Clone)]
pub struct RestoreHandle {
    inner: Arc<RestoreState>,
}

impl RestoreHandle {
    pub fn restore(&self) -> io::Result<()> {
        if self.inner.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.inner.ops.leave()
    }
}

/// Enters the alternate screen on creation and restores on drop. Panics and
/// early returns both unwind through here, so the shell comes back usable.
pub struct TerminalGuard {
    handle: RestoreHandle,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        Self::with_screen(Box::new(CrosstermScreen))
    }

    pub fn with_screen(ops: Box<dyn ScreenOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            handle: RestoreHandle {
                inner: Arc::new(RestoreState {
                    done: AtomicBool::new(false),
                    ops,
                }),
            },
        })
    }

    pub fn handle(&self) -> RestoreHandle {
        self.handle.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.handle.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
}

impl TerminationSignal {
    /// Conventional 128+N exit codes.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::Interrupt => 130,
            TerminationSignal::Terminate => 143,
        }
    }
}

/// Watches SIGINT/SIGTERM on a background thread. The main loop gets a
/// chance to quit cleanly through the returned channel; if it is still
/// running after the grace period, the watcher restores the terminal and
/// exits the process itself.
#[cfg(unix)]
pub fn watch_termination(
    handle: RestoreHandle,
) -> io::Result<std::sync::mpsc::Receiver<TerminationSignal>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let (tx, rx) = std::sync::mpsc::channel();
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::spawn(move || {
        for raw in signals.forever() {
            let signal = match raw {
                SIGINT => TerminationSignal::Interrupt,
                SIGTERM => TerminationSignal::Terminate,
                _ => continue,
            };

            let _ = tx.send(signal);

            std::thread::sleep(Duration::from_secs(2));
            let _ = handle.restore();
            std::process::exit(signal.exit_code());
        }
    });
    Ok(rx)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
