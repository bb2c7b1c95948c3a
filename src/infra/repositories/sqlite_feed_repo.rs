use crate::domain::{models::feed::CalendarFeed, ports::CalendarFeedRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteFeedRepo {
    pool: SqlitePool,
}

impl SqliteFeedRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CalendarFeedRepository for SqliteFeedRepo {
    async fn create(&self, feed: &CalendarFeed) -> Result<CalendarFeed, AppError> {
        sqlx::query_as::<_, CalendarFeed>(
            "INSERT INTO calendar_feeds (id, name, url, created_at) VALUES (?, ?, ?, ?) RETURNING *",
        )
            .bind(&feed.id).bind(&feed.name).bind(&feed.url).bind(feed.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<CalendarFeed>, AppError> {
        sqlx::query_as::<_, CalendarFeed>("SELECT * FROM calendar_feeds ORDER BY created_at ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM calendar_feeds WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Calendar feed not found".into()));
        }
        Ok(())
    }
}
