//! Invocation timing facility
//!
//! Wall-clock time is measured with a monotonic clock around spawn and exit.
//! User and system CPU time come from the host's cumulative child-process
//! accounting: invocations are strictly sequential, so the delta between two
//! snapshots is the CPU time of the single child reaped in between.

use std::fmt;
use std::time::Duration;

use crate::utils::time::format_clock;

/// Cumulative CPU time consumed by children reaped so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CpuSnapshot {
    user: Duration,
    sys: Duration,
}

impl CpuSnapshot {
    /// Sample the host's child-process CPU accounting
    #[cfg(unix)]
    pub fn now() -> Self {
        let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
        let rc = unsafe { libc::getrusage(libc::RUSAGE_CHILDREN, usage.as_mut_ptr()) };
        if rc != 0 {
            return Self::default();
        }
        let usage = unsafe { usage.assume_init() };

        Self {
            user: timeval_to_duration(usage.ru_utime),
            sys: timeval_to_duration(usage.ru_stime),
        }
    }

    /// Child CPU accounting is unavailable off Unix; report zero durations
    #[cfg(not(unix))]
    pub fn now() -> Self {
        Self::default()
    }

    /// CPU time accumulated since an earlier snapshot
    pub fn since(&self, earlier: &CpuSnapshot) -> (Duration, Duration) {
        (
            self.user.saturating_sub(earlier.user),
            self.sys.saturating_sub(earlier.sys),
        )
    }
}

#[cfg(unix)]
fn timeval_to_duration(tv: libc::timeval) -> Duration {
    let secs = tv.tv_sec.max(0) as u64;
    let micros = tv.tv_usec.max(0) as u32;
    Duration::new(secs, micros.saturating_mul(1_000))
}

/// Elapsed real/user/system time for one solver invocation
#[derive(Debug, Clone, Copy)]
pub struct TimingReport {
    pub real: Duration,
    pub user: Duration,
    pub sys: Duration,
}

impl TimingReport {
    /// Build the report from the wall-clock duration and the CPU snapshots
    /// taken before the spawn and after the child was reaped
    pub fn new(real: Duration, before: CpuSnapshot, after: CpuSnapshot) -> Self {
        let (user, sys) = after.since(&before);
        Self { real, user, sys }
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "real\t{}", format_clock(self.real))?;
        writeln!(f, "user\t{}", format_clock(self.user))?;
        write!(f, "sys\t{}", format_clock(self.sys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_like_the_shell_time_builtin() {
        let report = TimingReport {
            real: Duration::from_millis(1234),
            user: Duration::from_millis(1100),
            sys: Duration::from_millis(50),
        };
        assert_eq!(
            report.to_string(),
            "real\t0m1.234s\nuser\t0m1.100s\nsys\t0m0.050s"
        );
    }

    #[test]
    fn snapshot_delta_saturates_at_zero() {
        let earlier = CpuSnapshot {
            user: Duration::from_secs(2),
            sys: Duration::from_secs(1),
        };
        let later = CpuSnapshot {
            user: Duration::from_secs(1),
            sys: Duration::from_secs(3),
        };

        let (user, sys) = later.since(&earlier);
        assert_eq!(user, Duration::ZERO);
        assert_eq!(sys, Duration::from_secs(2));
    }

    #[test]
    fn report_uses_the_snapshot_delta() {
        let before = CpuSnapshot {
            user: Duration::from_millis(100),
            sys: Duration::from_millis(20),
        };
        let after = CpuSnapshot {
            user: Duration::from_millis(350),
            sys: Duration::from_millis(70),
        };

        let report = TimingReport::new(Duration::from_millis(400), before, after);
        assert_eq!(report.real, Duration::from_millis(400));
        assert_eq!(report.user, Duration::from_millis(250));
        assert_eq!(report.sys, Duration::from_millis(50));
    }

    #[cfg(unix)]
    #[test]
    fn snapshot_delta_against_itself_is_zero() {
        let snapshot = CpuSnapshot::now();

        let (user, sys) = snapshot.since(&snapshot);
        assert_eq!(user, Duration::ZERO);
        assert_eq!(sys, Duration::ZERO);
    }
}
