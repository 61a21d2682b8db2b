//! Difference between two instants

use std::fmt;

use chrono::{Duration, NaiveDate};

use crate::date::Instant;

/// Elapsed time between two instants, always non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difference {
    /// Exact wall-clock duration from the earlier to the later instant
    pub duration: Duration,
    /// Midnight boundaries crossed between the two instants
    pub days: u64,
    /// Either input carried a time-of-day
    pub has_time: bool,
}

/// Compute the difference between two instants, in either order
pub fn diff(a: &Instant, b: &Instant) -> Difference {
    let (start, end) = if a.datetime() <= b.datetime() { (a, b) } else { (b, a) };

    let duration = end.datetime() - start.datetime();
    let days = count_days(start.date(), end.date());

    tracing::debug!(start = %start.datetime(), end = %end.datetime(), days, "computed difference");

    Difference {
        duration,
        days,
        has_time: a.has_time() || b.has_time(),
    }
}

/// Calendar days from `start` to `end`
fn count_days(start: NaiveDate, end: NaiveDate) -> u64 {
    u64::try_from((end - start).num_days()).unwrap_or(0)
}

/// Format a duration as hours, minutes and seconds: "4h30m0s", "30m0s", "45s"
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// "1 day", "0 days", "9 days"
pub fn format_days(days: u64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_time {
            return f.write_str(&format_days(self.days));
        }

        let duration = format_duration(self.duration);
        if self.days == 0 {
            f.write_str(&duration)
        } else {
            write!(f, "{} ({})", duration, format_days(self.days))
        }
    }
}
