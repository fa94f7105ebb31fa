use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact form submission as stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
