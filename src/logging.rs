//! Logging bootstrap.
//!
//! Stdout belongs to the renderer, so logs go to a rotating file
//! instead. Directory and level are overridable through
//! `TERMFOLIO_LOG_DIR` and `TERMFOLIO_LOG`.

use std::path::PathBuf;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;

use crate::error::AppError;

const LOG_FILE_BASENAME: &str = "termfolio";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start the file logger. Keep the returned handle alive for the
/// process lifetime; dropping it flushes and shuts logging down.
pub fn init() -> Result<LoggerHandle, AppError> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let spec = std::env::var("TERMFOLIO_LOG").unwrap_or_else(|_| default_level().to_string());

    let handle = Logger::try_with_str(&spec)?
        .log_to_file(
            FileSpec::default()
                .directory(&dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    info!(
        "termfolio {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        dir.display()
    );
    Ok(handle)
}

fn log_dir() -> PathBuf {
    std::env::var("TERMFOLIO_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("termfolio"))
}

fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}
