use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install a file logger according to `config`.
///
/// Returns `None` when no log file is configured. Otherwise the returned guard
/// must be kept alive for buffered events to be flushed.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let path = config.file.as_deref()?;
    let (writer, guard) = file_writer(path)?;

    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        return None;
    }

    tracing::info!(file = %path.display(), "logging initialized");
    Some(guard)
}

fn file_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    let file_name = path.file_name()?.to_str()?;
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .map_err(|e| eprintln!("Warning: cannot open log file '{}': {e}", path.display()))
        .ok()?;
    Some(tracing_appender::non_blocking(appender))
}
