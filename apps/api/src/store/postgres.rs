use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::attendance::{AttendanceDayLog, AttendanceDayLogRow};
use crate::models::curriculum::CurriculumItem;
use crate::models::score::TestScore;
use crate::models::student::Student;
use crate::models::volunteer::Volunteer;
use crate::store::RecordStore;

/// PostgreSQL-backed record store. Cheap to clone; wraps the pool.
#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_student(&self, student: &Student) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO students (id, name, age, class_label, created_at) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(student.id)
        .bind(&student.name)
        .bind(student.age)
        .bind(&student.class_label)
        .bind(student.created_at)
        .execute(&self.pool)
        .await?;

        debug!("Inserted student {}", student.id);
        Ok(())
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY name, id")
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    async fn get_student(&self, id: Uuid) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    async fn insert_attendance_log(&self, log: &AttendanceDayLog) -> Result<(), AppError> {
        sqlx::query("INSERT INTO daily_attendance (id, date, records) VALUES ($1, $2, $3)")
            .bind(log.id)
            .bind(log.date)
            .bind(Json(&log.records))
            .execute(&self.pool)
            .await?;

        debug!(
            "Inserted attendance log {} with {} records",
            log.id,
            log.records.len()
        );
        Ok(())
    }

    async fn attendance_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<AttendanceDayLog>, AppError> {
        let rows = sqlx::query_as::<_, AttendanceDayLogRow>(
            "SELECT id, date, records FROM daily_attendance WHERE date >= $1 ORDER BY date, id",
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AttendanceDayLog::from).collect())
    }

    async fn insert_score(&self, score: &TestScore) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO test_scores (id, student_id, subject, score, date) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(score.id)
        .bind(score.student_id)
        .bind(&score.subject)
        .bind(score.score)
        .bind(score.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_scores(&self) -> Result<Vec<TestScore>, AppError> {
        let scores =
            sqlx::query_as::<_, TestScore>("SELECT * FROM test_scores ORDER BY date DESC, id")
                .fetch_all(&self.pool)
                .await?;
        Ok(scores)
    }

    async fn scores_for_student(&self, student_id: Uuid) -> Result<Vec<TestScore>, AppError> {
        let scores =
            sqlx::query_as::<_, TestScore>("SELECT * FROM test_scores WHERE student_id = $1")
                .bind(student_id)
                .fetch_all(&self.pool)
                .await?;
        Ok(scores)
    }

    async fn insert_volunteer(&self, volunteer: &Volunteer) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO volunteers
                (id, name, location, latitude, longitude, assigned_center, resources, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(volunteer.id)
        .bind(&volunteer.name)
        .bind(&volunteer.location)
        .bind(volunteer.latitude)
        .bind(volunteer.longitude)
        .bind(&volunteer.assigned_center)
        .bind(&volunteer.resources)
        .bind(volunteer.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_volunteers(&self) -> Result<Vec<Volunteer>, AppError> {
        let volunteers =
            sqlx::query_as::<_, Volunteer>("SELECT * FROM volunteers ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await?;
        Ok(volunteers)
    }

    async fn insert_curriculum(&self, item: &CurriculumItem) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO curriculum
                (id, subject, grade, file_name, object_key, content_type, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(item.id)
        .bind(&item.subject)
        .bind(&item.grade)
        .bind(&item.file_name)
        .bind(&item.object_key)
        .bind(&item.content_type)
        .bind(item.uploaded_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_curriculum(&self) -> Result<Vec<CurriculumItem>, AppError> {
        let items = sqlx::query_as::<_, CurriculumItem>(
            "SELECT * FROM curriculum ORDER BY uploaded_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn get_curriculum(&self, id: Uuid) -> Result<Option<CurriculumItem>, AppError> {
        let item = sqlx::query_as::<_, CurriculumItem>("SELECT * FROM curriculum WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }
}
