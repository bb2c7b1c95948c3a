use crate::api::rate_limit::RateLimiter;
use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, CalendarFeedRepository, ContactNotifier, EmailService, FeedReader,
};
use std::sync::Arc;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub feed_repo: Arc<dyn CalendarFeedRepository>,
    pub email_service: Arc<dyn EmailService>,
    pub feed_reader: Arc<dyn FeedReader>,
    pub contact_notifier: Arc<dyn ContactNotifier>,
    pub rate_limiter: Arc<RateLimiter>,
    pub templates: Arc<Tera>,
}
