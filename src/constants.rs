//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SOLVER DEFAULTS
// =============================================================================

/// Default path of the external SAT solver executable
pub const DEFAULT_SOLVER_PATH: &str = "bin/sat";

/// Default problem file redirected into the solver's standard input
pub const DEFAULT_PROBLEM_PATH: &str = "sample_problems/vars-250-5.cnf";

// =============================================================================
// SWEEP DEFAULTS
// =============================================================================

/// Update rates passed to the solver, one invocation each, in this order
pub const DEFAULT_UPDATE_RATES: &[u64] = &[50, 100, 250, 500, 1000, 10_000, 100_000];

// =============================================================================
// LOGGING DEFAULTS
// =============================================================================

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_RUST_LOG: &str = "info";
