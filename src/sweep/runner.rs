//! Sweep runner - drives the solver across the update-rate list

use std::fs::File;
use std::process::{ExitStatus, Stdio};
use std::time::Instant;

use tracing::{info, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    utils::time::format_milliseconds,
};

use super::{
    invocation::SolverInvocation,
    timing::{CpuSnapshot, TimingReport},
};

/// Sweep runner that executes the external solver once per update rate
pub struct SweepRunner {
    config: Config,
}

impl SweepRunner {
    /// Create a new sweep runner
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the full sweep, in listed order, one invocation at a time.
    ///
    /// A non-zero solver exit is logged and the sweep proceeds to the next
    /// update rate. Failing to start an invocation at all (missing solver
    /// binary, unreadable problem file) terminates the sweep immediately.
    pub async fn run(&self) -> AppResult<()> {
        info!(
            solver = %self.config.solver.binary_path.display(),
            problem = %self.config.solver.problem_path.display(),
            "Starting solver sweep"
        );

        for &rate in &self.config.sweep.update_rates {
            let invocation = SolverInvocation::new(&self.config.solver, rate);

            println!("{}", invocation.progress_line());

            let (status, timing) = self.execute(&invocation).await?;

            println!("{}", timing);

            if status.success() {
                info!(
                    update_rate = invocation.update_rate(),
                    elapsed = %format_milliseconds(timing.real.as_secs_f64() * 1000.0),
                    "Solver invocation finished"
                );
            } else {
                warn!(
                    update_rate = invocation.update_rate(),
                    exit_code = status.code().unwrap_or(-1),
                    "Solver exited with failure, continuing sweep"
                );
            }
        }

        info!(
            invocations = self.config.sweep.update_rates.len(),
            "Sweep complete"
        );

        Ok(())
    }

    /// Spawn one invocation and block until the child exits.
    ///
    /// The child inherits stdout and stderr; only stdin is redirected, from
    /// the configured problem file. No output is captured.
    async fn execute(
        &self,
        invocation: &SolverInvocation,
    ) -> AppResult<(ExitStatus, TimingReport)> {
        let stdin = File::open(invocation.problem()).map_err(|source| AppError::ProblemFile {
            path: invocation.problem().to_path_buf(),
            source,
        })?;

        let mut command = invocation.to_command();
        command.stdin(Stdio::from(stdin));

        let cpu_before = CpuSnapshot::now();
        let start = Instant::now();

        let mut child = command.spawn().map_err(|source| AppError::Launch {
            path: invocation.program().to_path_buf(),
            source,
        })?;
        let status = child.wait().await.map_err(AppError::Wait)?;

        let real = start.elapsed();
        let cpu_after = CpuSnapshot::now();

        Ok((status, TimingReport::new(real, cpu_before, cpu_after)))
    }
}
