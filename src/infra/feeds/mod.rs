pub mod http_feed_reader;

use crate::domain::models::feed::{BusyInterval, CalendarFeed};
use crate::domain::ports::FeedReader;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::warn;

/// Fans out over all configured feeds concurrently and collects their busy
/// intervals. A failing feed contributes nothing and its name is reported
/// back so availability can be marked as degraded; the query itself never
/// fails on feed errors.
pub async fn collect_busy(
    reader: &Arc<dyn FeedReader>,
    feeds: Vec<CalendarFeed>,
    day_start: DateTime<Utc>,
    day_end: DateTime<Utc>,
) -> (Vec<BusyInterval>, Vec<String>) {
    let mut set = JoinSet::new();

    for feed in feeds {
        let reader = reader.clone();
        set.spawn(async move {
            let result = reader.fetch_busy(&feed, day_start, day_end).await;
            (feed.name, result)
        });
    }

    let mut busy = Vec::new();
    let mut failed = Vec::new();

    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((_, Ok(intervals))) => busy.extend(intervals),
            Ok((name, Err(e))) => {
                warn!("Calendar feed '{}' dropped from availability: {}", name, e);
                failed.push(name);
            }
            Err(e) => warn!("Feed fetch task failed to join: {}", e),
        }
    }

    failed.sort();
    (busy, failed)
}
