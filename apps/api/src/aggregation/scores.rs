use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::score::TestScore;

/// One point of a student's chronological score chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePoint {
    pub subject: String,
    pub score: f64,
    pub date: DateTime<Utc>,
}

/// The student's scores ordered by date ascending. Same-date scores keep
/// their input order.
pub fn build_score_series(scores: &[TestScore], student_id: Uuid) -> Vec<ScorePoint> {
    let mut series: Vec<ScorePoint> = scores
        .iter()
        .filter(|s| s.student_id == student_id)
        .map(|s| ScorePoint {
            subject: s.subject.clone(),
            score: s.score,
            date: s.date,
        })
        .collect();

    series.sort_by_key(|p| p.date);
    series
}

/// Most recent score for the student, optionally restricted to one subject
/// (compared case-insensitively after trimming).
pub fn latest_score<'a>(
    scores: &'a [TestScore],
    student_id: Uuid,
    subject: Option<&str>,
) -> Option<&'a TestScore> {
    let subject = subject.map(str::trim).filter(|s| !s.is_empty());

    scores
        .iter()
        .filter(|s| s.student_id == student_id)
        .filter(|s| subject.map_or(true, |wanted| s.subject.trim().eq_ignore_ascii_case(wanted)))
        .max_by_key(|s| s.date)
}
