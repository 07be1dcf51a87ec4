//! Aggregate study time across the session log.

use serde::Serialize;

use super::session::Session;
use super::timer::format_duration;

/// Totals over a sequence of sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudySummary {
    /// Number of sessions.
    pub count: usize,
    /// Sum of all durations, in seconds.
    pub total_seconds: f64,
    /// Mean session length in seconds (0 when there are no sessions).
    pub average_seconds: f64,
    /// Longest single session in seconds (0 when there are no sessions).
    pub longest_seconds: f64,
}

impl StudySummary {
    /// Summarize sessions in log order.
    #[must_use]
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let count = sessions.len();
        let total_seconds: f64 = sessions.iter().map(Session::duration_seconds).sum();
        let longest_seconds = sessions
            .iter()
            .map(Session::duration_seconds)
            .fold(0.0, f64::max);

        #[allow(clippy::cast_precision_loss)]
        let average_seconds = if count == 0 {
            0.0
        } else {
            total_seconds / count as f64
        };

        Self {
            count,
            total_seconds,
            average_seconds,
            longest_seconds,
        }
    }

    /// Whether any time has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Total study time as display text.
    #[must_use]
    pub fn format_total(&self) -> String {
        format_duration(self.total_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seconds: f64) -> Session {
        Session::new("01/01/2024 08:00:00", seconds).unwrap()
    }

    #[test]
    fn test_empty_summary() {
        let summary = StudySummary::from_sessions(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.count, 0);
        assert!(summary.total_seconds.abs() < f64::EPSILON);
        assert!(summary.average_seconds.abs() < f64::EPSILON);
        assert!(summary.longest_seconds.abs() < f64::EPSILON);
        assert_eq!(summary.format_total(), "0 horas, 0 minutos e 0 segundos");
    }

    #[test]
    fn test_total_of_two_sessions() {
        let summary = StudySummary::from_sessions(&[session(1800.0), session(5400.0)]);

        assert_eq!(summary.count, 2);
        assert!((summary.total_seconds - 7200.0).abs() < f64::EPSILON);
        assert!((summary.average_seconds - 3600.0).abs() < f64::EPSILON);
        assert!((summary.longest_seconds - 5400.0).abs() < f64::EPSILON);
        assert_eq!(summary.format_total(), "2 horas, 0 minutos e 0 segundos");
    }

    #[test]
    fn test_fractional_totals_accumulate_before_truncation() {
        let summary = StudySummary::from_sessions(&[session(0.6), session(0.6)]);
        assert_eq!(summary.format_total(), "0 horas, 0 minutos e 1 segundos");
    }
}
