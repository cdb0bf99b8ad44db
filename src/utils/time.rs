//! Time formatting utilities

use std::time::Duration;

/// Format a duration the way the POSIX shell `time` builtin does: `1m5.500s`
pub fn format_clock(duration: Duration) -> String {
    let total_seconds = duration.as_secs_f64();
    let minutes = (total_seconds / 60.0).floor() as u64;
    let seconds = total_seconds - (minutes * 60) as f64;

    format!("{}m{:.3}s", minutes, seconds)
}

/// Format milliseconds as a human-readable string
pub fn format_milliseconds(ms: f64) -> String {
    if ms < 1000.0 {
        format!("{:.0}ms", ms)
    } else if ms < 60_000.0 {
        format!("{:.2}s", ms / 1000.0)
    } else {
        let seconds = (ms / 1000.0) as i64;
        let minutes = seconds / 60;
        let remaining_seconds = seconds % 60;
        format!("{}m {}s", minutes, remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "0m0.000s");
        assert_eq!(format_clock(Duration::from_millis(123)), "0m0.123s");
        assert_eq!(format_clock(Duration::from_millis(65_500)), "1m5.500s");
        assert_eq!(format_clock(Duration::from_secs(120)), "2m0.000s");
    }

    #[test]
    fn test_format_milliseconds() {
        assert_eq!(format_milliseconds(500.0), "500ms");
        assert_eq!(format_milliseconds(1500.0), "1.50s");
        assert_eq!(format_milliseconds(65_000.0), "1m 5s");
    }
}
