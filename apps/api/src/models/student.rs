use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Name shown for ids that appear in attendance or scores but not in the roster.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    #[serde(rename = "class")]
    pub class_label: String,
    pub created_at: DateTime<Utc>,
}
