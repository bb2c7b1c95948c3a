use crate::domain::models::{
    booking::Booking,
    feed::{BusyInterval, CalendarFeed},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Re-checks for overlapping confirmed bookings and inserts in a single
    /// transaction. Returns `Conflict` when the slot is already taken.
    async fn create_if_free(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    /// Confirmed bookings whose interval intersects `[start, end)`.
    async fn list_by_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Booking>, AppError>;
    async fn list_all(&self) -> Result<Vec<Booking>, AppError>;
}

#[async_trait]
pub trait CalendarFeedRepository: Send + Sync {
    async fn create(&self, feed: &CalendarFeed) -> Result<CalendarFeed, AppError>;
    async fn list(&self) -> Result<Vec<CalendarFeed>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait FeedReader: Send + Sync {
    /// Fetches one feed and returns the busy intervals that intersect
    /// `[day_start, day_end)`.
    async fn fetch_busy(
        &self,
        feed: &CalendarFeed,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>, AppError>;
}

#[async_trait]
pub trait EmailService: Send + Sync {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        attachment_name: Option<&str>,
        attachment_data: Option<&[u8]>,
    ) -> Result<(), AppError>;
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), AppError>;
}
