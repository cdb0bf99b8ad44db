//! Per-iteration solver invocation

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::config::SolverConfig;

/// A single solver invocation: the program, its sole command-line argument,
/// and the problem file bound to standard input. Created per loop iteration,
/// consumed immediately, never retained.
#[derive(Debug, Clone)]
pub struct SolverInvocation {
    program: PathBuf,
    problem: PathBuf,
    update_rate: u64,
}

impl SolverInvocation {
    /// Create the invocation for one update rate
    pub fn new(solver: &SolverConfig, update_rate: u64) -> Self {
        Self {
            program: solver.binary_path.clone(),
            problem: solver.problem_path.clone(),
            update_rate,
        }
    }

    /// The update rate this invocation passes to the solver
    pub fn update_rate(&self) -> u64 {
        self.update_rate
    }

    /// Path of the solver executable
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Path of the problem file redirected into stdin
    pub fn problem(&self) -> &Path {
        &self.problem
    }

    /// The solver's sole command-line argument: the decimal form of the rate
    pub fn argument(&self) -> String {
        self.update_rate.to_string()
    }

    /// Progress line emitted before the invocation starts
    pub fn progress_line(&self) -> String {
        format!("executing with update rate: {}", self.update_rate)
    }

    /// Build the process invocation. Stream wiring is left to the runner.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(self.argument());
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsStr;

    fn solver_config() -> SolverConfig {
        SolverConfig {
            binary_path: PathBuf::from("bin/sat"),
            problem_path: PathBuf::from("sample_problems/vars-250-5.cnf"),
        }
    }

    #[test]
    fn progress_line_names_the_update_rate() {
        let invocation = SolverInvocation::new(&solver_config(), 100);
        assert_eq!(invocation.progress_line(), "executing with update rate: 100");
    }

    #[test]
    fn argument_is_plain_decimal() {
        let invocation = SolverInvocation::new(&solver_config(), 100_000);
        assert_eq!(invocation.argument(), "100000");

        let invocation = SolverInvocation::new(&solver_config(), 50);
        assert_eq!(invocation.argument(), "50");
    }

    #[test]
    fn command_carries_program_and_single_argument() {
        let invocation = SolverInvocation::new(&solver_config(), 100);
        let command = invocation.to_command();
        let std_command = command.as_std();

        assert_eq!(std_command.get_program(), OsStr::new("bin/sat"));
        let args: Vec<&OsStr> = std_command.get_args().collect();
        assert_eq!(args, [OsStr::new("100")]);
    }
}
