//! Attendance anomaly detection: flags students absent too often in the window.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::aggregation::TrailingWindow;
use crate::models::attendance::{AttendanceDayLog, AttendanceStatus};
use crate::models::student::UNKNOWN_STUDENT;

pub const DEFAULT_ABSENCE_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedStudent {
    pub id: Uuid,
    pub name: String,
    pub absences: u32,
}

/// Counts absences per student across logs inside `window` and returns every
/// student at or above `threshold`.
///
/// Ids missing from `students_by_id` are still counted and reported under the
/// "Unknown Student" name. Output is ordered by absences descending, then
/// name, then id.
pub fn compute_absence_flags(
    students_by_id: &HashMap<Uuid, String>,
    logs: &[AttendanceDayLog],
    window: &TrailingWindow,
    threshold: u32,
) -> Vec<FlaggedStudent> {
    let mut counts: HashMap<Uuid, u32> = HashMap::new();

    for log in logs.iter().filter(|log| window.contains(log.date)) {
        for (student_id, status) in &log.records {
            if *status == AttendanceStatus::Absent {
                *counts.entry(*student_id).or_insert(0) += 1;
            }
        }
    }

    let mut flagged: Vec<FlaggedStudent> = counts
        .into_iter()
        .filter(|&(_, absences)| absences >= threshold)
        .map(|(id, absences)| FlaggedStudent {
            id,
            name: students_by_id
                .get(&id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
            absences,
        })
        .collect();

    flagged.sort_by(|a, b| {
        b.absences
            .cmp(&a.absences)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    flagged
}
