//! Content Blocks Gallery - Main Entry Point
//!
//! Usage: `content-blocks [CONTENT_FILE]` where the file is `.toml` or `.json`.

use std::path::PathBuf;

use content_blocks::app::application::run_app;
use content_blocks::helpers::{get_or_create_data_dir, is_development};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log to stderr and to a daily rolling file in the data directory
fn init_tracing() -> Option<WorkerGuard> {
    let level = if is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "content-blocks.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_ansi(false).with_writer(writer)), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
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
    let _guard = init_tracing();

    let content_path = std::env::args_os().nth(1).map(PathBuf::from);
    tracing::info!(content = ?content_path, "Starting content-blocks gallery...");

    run_app(content_path);
}
