use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Volunteer {
    pub id: Uuid,
    pub name: String,
    /// Free-text description, e.g. "Delhi Center".
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub assigned_center: String,
    pub resources: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Volunteer {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
