//! Sweep execution engine
//!
//! The sweep is a flat, non-branching sequence of independent solver
//! invocations:
//!
//! 1. **Invocation** (`invocation.rs`): one command description per update
//!    rate, holding the solver program, its single decimal argument, and the
//!    problem file bound to stdin.
//!
//! 2. **Runner** (`runner.rs`): iterates the update-rate list in order,
//!    spawning and awaiting one child process at a time. Solver exit codes
//!    never stop the sweep; failing to start an invocation does.
//!
//! 3. **Timing** (`timing.rs`): wall-clock and child CPU accounting around
//!    each invocation, rendered as a `time(1)`-style report.

pub mod invocation;
pub mod runner;
pub mod timing;

pub use invocation::SolverInvocation;
pub use runner::SweepRunner;
pub use timing::TimingReport;
