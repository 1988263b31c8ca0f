use std::io;
use std::time::Duration;

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use quizdeck::app::App;
use quizdeck::kernel::services::adapters::{ensure_settings_file, load_settings, QuestionFile};
use quizdeck::kernel::AppState;
#[cfg(unix)]
use quizdeck::tui::watch_termination;
use quizdeck::tui::{TerminalGuard, TerminationSignal};

mod logging;

fn main() -> io::Result<()> {
    let logging_guard = logging::init();

    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "could not create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    let question_file = QuestionFile::new(
        settings
            .questions_file
            .unwrap_or_else(QuestionFile::default_path),
    );

    let (library, load_error) = match question_file.load() {
        Ok(questions) => (questions, None),
        Err(err) => {
            tracing::error!(
                error = %err,
                path = %question_file.path().display(),
                "failed to load user questions"
            );
            (
                Vec::new(),
                Some(format!("Error loading user questions: {err}")),
            )
        }
    };

    let mut state = AppState::new(library);
    state.notice = load_error;

    let guard = TerminalGuard::enter()?;

    #[cfg(unix)]
    let signal_rx = match watch_termination(guard.handle()) {
        Ok(rx) => Some(rx),
        Err(err) => {
            tracing::warn!(error = %err, "could not install signal handlers");
            None
        }
    };

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new(state, question_file);

    let mut exit_signal: Option<TerminationSignal> = None;
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;

        #[cfg(unix)]
        if let Some(signal) = signal_rx.as_ref().and_then(|rx| rx.try_recv().ok()) {
            exit_signal = Some(signal);
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            app.handle_event(&event::read()?);
        }
    }

    guard.handle().restore()?;
    drop(guard);

    if let Some(signal) = exit_signal {
        tracing::info!(code = signal.exit_code(), "terminated by signal");
        drop(logging_guard);
        std::process::exit(signal.exit_code());
    }

    Ok(())
}
