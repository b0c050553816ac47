//! Aggregation Engine: derived views over fetched records.
//!
//! Everything here is a pure function of its inputs. Route handlers fetch the
//! raw records from the `RecordStore` and pass them in; nothing is persisted.

pub mod absence;
pub mod attendance;
pub mod handlers;
pub mod scores;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::errors::AppError;

pub use absence::{compute_absence_flags, FlaggedStudent};
pub use attendance::{compute_attendance_summary, AttendanceSummary};
pub use scores::{build_score_series, latest_score, ScorePoint};

/// Longest lookback accepted from a query string.
pub const MAX_WINDOW_DAYS: i64 = 366;

/// A fixed-length lookback period ending at `until`.
#[derive(Debug, Clone, Copy)]
pub struct TrailingWindow {
    pub days: i64,
    pub until: DateTime<Utc>,
}

impl TrailingWindow {
    /// Window of `days` ending now. Lengths are clamped to `1..=MAX_WINDOW_DAYS`.
    pub fn ending_now(days: i64) -> Self {
        Self::ending_at(days, Utc::now())
    }

    pub fn ending_at(days: i64, until: DateTime<Utc>) -> Self {
        Self {
            days: days.clamp(1, MAX_WINDOW_DAYS),
            until,
        }
    }

    /// Window for a `?days=` parameter, falling back to `default_days`.
    /// Lengths above `MAX_WINDOW_DAYS` are rejected rather than clamped.
    pub fn from_query(days: Option<i64>, default_days: i64) -> Result<Self, AppError> {
        match days {
            Some(days) if days > MAX_WINDOW_DAYS => Err(AppError::Validation(format!(
                "days must be at most {MAX_WINDOW_DAYS}."
            ))),
            Some(days) => Ok(Self::ending_now(days)),
            None => Ok(Self::ending_now(default_days)),
        }
    }

    pub fn cutoff(&self) -> DateTime<Utc> {
        self.until - Duration::days(self.days)
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        date >= self.cutoff()
    }
}

/// Query parameters shared by the windowed dashboard views.
#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    pub days: Option<i64>,
    pub threshold: Option<u32>,
}
