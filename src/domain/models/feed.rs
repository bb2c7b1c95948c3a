use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named iCal subscription URL managed through the admin endpoints.
/// Fetched on every availability query; never cached.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CalendarFeed {
    pub id: String,
    pub name: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl CalendarFeed {
    pub fn new(name: String, url: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            url,
            created_at: Utc::now(),
        }
    }
}

/// A transient busy range derived from an external calendar event.
/// Not persisted and carries no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
