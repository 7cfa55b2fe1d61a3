//! Settings domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use rekhali_core::SettingId;

/// A single key/value setting row.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Setting {
    pub id: SettingId,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
