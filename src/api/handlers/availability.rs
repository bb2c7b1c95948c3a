use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::api::dtos::requests::AvailabilityQuery;
use crate::api::dtos::responses::AvailabilityResponse;
use crate::domain::services::availability::{calculate_slots, day_bounds};
use crate::error::AppError;
use crate::infra::feeds::collect_busy;
use crate::state::AppState;
use chrono::NaiveDate;
use std::sync::Arc;

/// Free slots for one day: confirmed bookings plus whatever the external
/// feeds report as busy. Feed failures degrade the result instead of
/// erroring it; the dropped feeds are named in the response.
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (expected YYYY-MM-DD)".into()))?;

    let config = &state.config;
    let (day_start, day_end) = day_bounds(date, config.timezone)
        .ok_or_else(|| AppError::Validation("Date is not a valid local day".into()))?;

    let bookings = state.booking_repo.list_by_range(day_start, day_end).await?;
    let feeds = state.feed_repo.list().await?;
    let (busy, failed_feeds) = collect_busy(&state.feed_reader, feeds, day_start, day_end).await;

    let slots = calculate_slots(
        date,
        config.timezone,
        config.work_start,
        config.work_end,
        config.slot_minutes,
        &bookings,
        &busy,
    );

    Ok(Json(AvailabilityResponse {
        date: query.date,
        slots: slots.iter().map(|s| s.to_rfc3339()).collect(),
        failed_feeds,
    }))
}
