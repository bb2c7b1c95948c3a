use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The fixed menu of bookable session types. Slugs are what clients submit
/// and what gets persisted; labels are used in emails and invites.
pub const SERVICE_MENU: &[(&str, &str)] = &[
    ("discovery-call", "Discovery Call"),
    ("portrait-session", "Portrait Session"),
    ("podcast-recording", "Podcast Recording"),
];

pub fn service_label(service_type: &str) -> Option<&'static str> {
    SERVICE_MENU
        .iter()
        .find(|(slug, _)| *slug == service_type)
        .map(|(_, label)| *label)
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub service_type: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub client_name: String,
    pub client_email: String,
    pub service_type: String,
    pub start: DateTime<Utc>,
    pub duration_min: i64,
    pub note: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let end_time = params.start + chrono::Duration::minutes(params.duration_min);

        Self {
            id: Uuid::new_v4().to_string(),
            client_name: params.client_name,
            client_email: params.client_email,
            service_type: params.service_type,
            start_time: params.start,
            end_time,
            status: "CONFIRMED".to_string(),
            note: params.note,
            created_at: Utc::now(),
        }
    }
}
