use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateFeedRequest;
use crate::api::handlers::required;
use crate::domain::models::feed::CalendarFeed;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_feeds(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let feeds = state.feed_repo.list().await?;
    Ok(Json(feeds))
}

pub async fn create_feed(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateFeedRequest>,
) -> Result<impl IntoResponse, AppError> {
    let name = required(&payload.name, "name")?.to_string();
    let url = required(&payload.url, "url")?.to_string();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::Validation("Feed url must be an http(s) URL".into()));
    }

    let feed = CalendarFeed::new(name, url);
    let created = state.feed_repo.create(&feed).await?;
    info!("Created calendar feed: {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn delete_feed(
    State(state): State<Arc<AppState>>,
    Path(feed_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.feed_repo.delete(&feed_id).await?;
    info!("Deleted calendar feed: {}", feed_id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
