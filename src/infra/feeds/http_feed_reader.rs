use crate::domain::models::feed::{BusyInterval, CalendarFeed};
use crate::domain::ports::FeedReader;
use crate::domain::services::calendar::busy_intervals_from_ics;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use reqwest::Client;
use std::time::Duration;

pub struct HttpFeedReader {
    client: Client,
    timezone: Tz,
}

impl HttpFeedReader {
    pub fn new(timeout: Duration, timezone: Tz) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build feed HTTP client");
        Self { client, timezone }
    }
}

#[async_trait]
impl FeedReader for HttpFeedReader {
    async fn fetch_busy(
        &self,
        feed: &CalendarFeed,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>, AppError> {
        let res = self.client.get(&feed.url)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Feed fetch error: {}", e)))?;

        if !res.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Feed '{}' returned status {}", feed.name, res.status()
            )));
        }

        let raw = res.text()
            .await
            .map_err(|e| AppError::Upstream(format!("Feed body error: {}", e)))?;

        busy_intervals_from_ics(&raw, self.timezone, day_start, day_end)
    }
}
