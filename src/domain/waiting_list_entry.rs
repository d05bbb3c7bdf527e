//! src/domain/waiting_list_entry.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored waiting list entry, as returned to the client after insertion.
#[derive(serde::Serialize, serde::Deserialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct WaitingListEntry {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub interest: Option<String>,
    pub location: Option<String>,
    pub newsletter: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
