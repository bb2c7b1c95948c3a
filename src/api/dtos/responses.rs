use crate::domain::models::booking::Booking;
use serde::Serialize;

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub date: String,
    pub slots: Vec<String>,
    /// Names of feeds that could not be fetched; availability is computed
    /// from whatever succeeded.
    pub failed_feeds: Vec<String>,
}

#[derive(Serialize)]
pub struct BookingCreatedResponse {
    pub booking: Booking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ics: Option<String>,
}
