//! Application error type.

use flexi_logger::FlexiLoggerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger setup failed: {0}")]
    Logger(#[from] FlexiLoggerError),
}
