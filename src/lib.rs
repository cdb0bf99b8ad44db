//! SatSweep - SAT Solver Parameter Sweep Harness
//!
//! This library provides the core functionality for `satsweep`, a small
//! benchmarking harness that runs an external SAT solver once per entry of a
//! fixed "update rate" parameter list, redirecting a DIMACS CNF problem file
//! into the solver's standard input and timing every invocation.
//!
//! # Architecture
//!
//! - **Sweep**: the run loop, per-invocation command construction, and the
//!   timing facility
//! - **Config**: explicit configuration values (solver path, problem file)
//!   loaded from the environment at startup
//! - **Error**: application-wide error type; launch-level failures terminate
//!   the sweep, solver exit codes never do

pub mod config;
pub mod constants;
pub mod error;
pub mod sweep;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use sweep::SweepRunner;
