use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Per-student status for one submission.
pub type AttendanceRecords = BTreeMap<Uuid, AttendanceStatus>;

/// One attendance submission. Append-only: a second submission on the same
/// day is a second log, never an overwrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceDayLog {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub records: AttendanceRecords,
}

#[derive(Debug, FromRow)]
pub struct AttendanceDayLogRow {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub records: Json<AttendanceRecords>,
}

impl From<AttendanceDayLogRow> for AttendanceDayLog {
    fn from(row: AttendanceDayLogRow) -> Self {
        AttendanceDayLog {
            id: row.id,
            date: row.date,
            records: row.records.0,
        }
    }
}
