use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregation::TrailingWindow;
use crate::models::attendance::{AttendanceDayLog, AttendanceStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub present: u32,
    pub absent: u32,
}

impl AttendanceSummary {
    pub fn total(&self) -> u32 {
        self.present + self.absent
    }
}

/// Tallies one student's present/absent days over the logs inside `window`.
/// Logs without an entry for the student count towards neither side.
pub fn compute_attendance_summary(
    logs: &[AttendanceDayLog],
    student_id: Uuid,
    window: &TrailingWindow,
) -> AttendanceSummary {
    logs.iter()
        .filter(|log| window.contains(log.date))
        .filter_map(|log| log.records.get(&student_id))
        .fold(AttendanceSummary::default(), |mut summary, status| {
            match status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
            }
            summary
        })
}
