//! Duration formatting and parsing for study sessions.

use std::fmt;

use chrono::Duration;
use serde::Serialize;

/// A duration split into whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBreakdown {
    /// Whole hours.
    pub hours: u64,
    /// Whole minutes past the hour (0-59).
    pub minutes: u64,
    /// Whole seconds past the minute (0-59).
    pub seconds: u64,
}

impl TimeBreakdown {
    /// Split a number of seconds, discarding any fraction of a second.
    ///
    /// Negative and NaN inputs count as zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_seconds(total_seconds: f64) -> Self {
        // `as` truncates toward zero and saturates, which is what we want here.
        let whole = total_seconds as u64;

        Self {
            hours: whole / 3600,
            minutes: (whole % 3600) / 60,
            seconds: whole % 60,
        }
    }
}

impl fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} horas, {} minutos e {} segundos",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Format a number of seconds as `"H horas, M minutos e S segundos"`.
#[must_use]
pub fn format_duration(total_seconds: f64) -> String {
    TimeBreakdown::from_seconds(total_seconds).to_string()
}

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number is taken as minutes.
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<i64>() {
        return if minutes > 0 {
            Duration::try_minutes(minutes)
        } else {
            None
        };
    }

    let mut total_seconds: i64 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else if c.is_whitespace() {
            continue;
        } else if current_num.is_empty() {
            return None;
        } else {
            let num: i64 = current_num.parse().ok()?;
            current_num.clear();

            let unit = match c {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total_seconds = total_seconds.checked_add(num.checked_mul(unit)?)?;
        }
    }

    if !current_num.is_empty() {
        let num: i64 = current_num.parse().ok()?;
        total_seconds = total_seconds.checked_add(num.checked_mul(60)?)?;
    }

    if total_seconds > 0 {
        Duration::try_seconds(total_seconds)
    } else {
        None
    }
}
