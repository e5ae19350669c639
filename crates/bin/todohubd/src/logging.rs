//! `tracing` subscriber setup: console output filtered by the configured
//! directive, plus daily-rotated files under the log directory.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped and must be held
/// until the process exits.
///
/// # Errors
///
/// Fails when the log directory cannot be created.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>, InitError> {
    let console = fmt::layer().with_filter(EnvFilter::new(&config.filter));

    let (file, guard) = match &config.directory {
        Some(directory) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(directory)?);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(LevelFilter::INFO);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry().with(console).with(file).init();
    Ok(guard)
}

/// `todohub.<date>.log` files in `directory`, one per day.
fn file_appender(directory: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("todohub")
        .filename_suffix("log")
        .build(directory)
}
