//! Record Store: the persistence seam for students, attendance, scores,
//! volunteers and curriculum metadata.
//!
//! `AppState` holds an `Arc<dyn RecordStore>`. Production uses `PgRecordStore`;
//! tests substitute an in-memory store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::attendance::AttendanceDayLog;
use crate::models::curriculum::CurriculumItem;
use crate::models::score::TestScore;
use crate::models::student::Student;
use crate::models::volunteer::Volunteer;

pub mod postgres;

pub use postgres::PgRecordStore;

/// All writes are single independent inserts. Nothing here spans collections.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_student(&self, student: &Student) -> Result<(), AppError>;

    /// All students, ordered by name.
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;

    async fn get_student(&self, id: Uuid) -> Result<Option<Student>, AppError>;

    async fn insert_attendance_log(&self, log: &AttendanceDayLog) -> Result<(), AppError>;

    /// Logs dated at or after `cutoff`, oldest first.
    async fn attendance_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<AttendanceDayLog>, AppError>;

    async fn insert_score(&self, score: &TestScore) -> Result<(), AppError>;

    /// Every score, newest first.
    async fn list_scores(&self) -> Result<Vec<TestScore>, AppError>;

    /// Scores for one student in no guaranteed order.
    async fn scores_for_student(&self, student_id: Uuid) -> Result<Vec<TestScore>, AppError>;

    async fn insert_volunteer(&self, volunteer: &Volunteer) -> Result<(), AppError>;

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, AppError>;

    async fn insert_curriculum(&self, item: &CurriculumItem) -> Result<(), AppError>;

    /// Curriculum metadata, newest upload first.
    async fn list_curriculum(&self) -> Result<Vec<CurriculumItem>, AppError>;

    async fn get_curriculum(&self, id: Uuid) -> Result<Option<CurriculumItem>, AppError>;
}
