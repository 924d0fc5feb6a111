use crate::core::TallyError;
use crate::utils::output::OutputStyle;
use std::io::{self, Write};
use thiserror::Error;

/// Hint printed after errors caused by how the tool was invoked
pub const HELP_HINT: &str = "Use \"tally --help\" for usage information.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("At least two numbers are required.")]
    InvalidArgumentCount { found: usize },

    #[error("\"{0}\" is not a valid number.")]
    InvalidNumberLiteral(String),

    #[error("{0}")]
    Tally(#[from] TallyError),

    #[error("{0}")]
    Usage(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether the help hint should follow the error line
    pub fn wants_hint(&self) -> bool {
        matches!(self, AppError::InvalidArgumentCount { .. } | AppError::Usage(_))
    }
}

pub fn report_error(err: &AppError, out: &mut impl Write, style: &OutputStyle) -> io::Result<()> {
    writeln!(out, "{}", style.error(&format!("Error: {}", err)))?;
    if err.wants_hint() {
        writeln!(out, "{}", style.muted(HELP_HINT))?;
    }
    Ok(())
}
