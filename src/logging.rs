use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Keeps the non-blocking appender alive; dropping it flushes pending logs.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// File-only logging setup. Returns `None` when no writable log directory
/// exists or a subscriber is already installed; the app runs unlogged then.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = resolve_log_dir()?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        &log_dir,
        "quizdeck.log",
    ));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizdeck=info"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok()?;

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));
    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}

fn resolve_log_dir() -> Option<PathBuf> {
    if let Ok(dir) = quizdeck::kernel::services::adapters::ensure_log_dir() {
        return Some(dir);
    }
    let fallback = std::env::temp_dir().join("quizdeck").join("logs");
    std::fs::create_dir_all(&fallback).ok()?;
    Some(fallback)
}
