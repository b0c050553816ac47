use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TestScore {
    pub id: Uuid,
    /// Not enforced as a foreign key; scores can outlive roster changes.
    pub student_id: Uuid,
    pub subject: String,
    pub score: f64,
    pub date: DateTime<Utc>,
}

/// A score row joined with the resolved student name for table views.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreWithStudent {
    #[serde(flatten)]
    pub score: TestScore,
    pub student_name: String,
}
