use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CurriculumItem {
    pub id: Uuid,
    pub subject: String,
    pub grade: String,
    pub file_name: String,
    pub object_key: String,
    pub content_type: String,
    pub uploaded_at: DateTime<Utc>,
}
