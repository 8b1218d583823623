//! Cloud Space Client - Main Entry Point

use cloud_space::app::application::run_app;
use cloud_space::constants::LOG_FILE_PREFIX;
use cloud_space::helpers::{get_or_create_log_dir, is_development};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log to stdout, and to a daily rolling file when the log dir is available
fn init_logger() -> Option<WorkerGuard> {
    let default_level = if is_development() { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, guard) = match get_or_create_log_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("log directory unavailable, logging to stdout only: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}

fn main() {
    let _guard = init_logger();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Cloud Space");

    run_app();
}
