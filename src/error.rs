//! Custom error types and handling
//!
//! This module defines the application's error types. Only launch-level
//! failures exist here: a solver that exits non-zero is reported by the
//! runner but is never an error, while a solver that cannot be started at
//! all terminates the sweep.

use std::io;
use std::path::PathBuf;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Launch-level errors: the invocation never started
    #[error("Failed to launch solver '{}': {}", path.display(), source)]
    Launch { path: PathBuf, source: io::Error },

    #[error("Cannot open problem file '{}': {}", path.display(), source)]
    ProblemFile { path: PathBuf, source: io::Error },

    // The host wait primitive itself failed after a successful spawn
    #[error("Failed waiting for solver to exit: {0}")]
    Wait(io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Launch { .. } => "LAUNCH_ERROR",
            Self::ProblemFile { .. } => "PROBLEM_FILE_ERROR",
            Self::Wait(_) => "WAIT_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = AppError::Launch {
            path: PathBuf::from("bin/sat"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(err.error_code(), "LAUNCH_ERROR");

        let err = AppError::Configuration(ConfigError::InvalidValue("SOLVER_PATH".to_string()));
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[test]
    fn test_launch_error_names_the_program() {
        let err = AppError::Launch {
            path: PathBuf::from("bin/sat"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("bin/sat"));
    }
}
