//! Application configuration management
//!
//! This module handles loading and validating configuration from environment
//! variables. All configuration is loaded at startup and validated before the
//! sweep runs. The solver and problem paths are explicit values here instead
//! of ambient relative-path lookups; the defaults reproduce the original
//! working-directory layout.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_PROBLEM_PATH, DEFAULT_RUST_LOG, DEFAULT_SOLVER_PATH, DEFAULT_UPDATE_RATES,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub runner: RunnerConfig,
    pub solver: SolverConfig,
    pub sweep: SweepConfig,
}

/// Harness-level configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub rust_log: String,
}

/// External solver configuration
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Path of the solver executable
    pub binary_path: PathBuf,
    /// Problem file bound to the solver's standard input
    pub problem_path: PathBuf,
}

/// Sweep parameter configuration
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Update rates, one solver invocation each, executed in this order
    pub update_rates: Vec<u64>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            runner: RunnerConfig::from_env(),
            solver: SolverConfig::from_env()?,
            sweep: SweepConfig::default(),
        })
    }
}

impl RunnerConfig {
    fn from_env() -> Self {
        Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.to_string()),
        }
    }
}

impl SolverConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let binary = require_non_empty(
            "SOLVER_PATH",
            env::var("SOLVER_PATH").unwrap_or_else(|_| DEFAULT_SOLVER_PATH.to_string()),
        )?;
        let problem = require_non_empty(
            "PROBLEM_PATH",
            env::var("PROBLEM_PATH").unwrap_or_else(|_| DEFAULT_PROBLEM_PATH.to_string()),
        )?;

        Ok(Self {
            binary_path: PathBuf::from(binary),
            problem_path: PathBuf::from(problem),
        })
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            update_rates: DEFAULT_UPDATE_RATES.to_vec(),
        }
    }
}

/// Reject empty or whitespace-only overrides
fn require_non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::InvalidValue(var.to_string()))
    } else {
        Ok(value)
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
