use axum::{extract::{Path, State}, http::header, response::IntoResponse, Json};
use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::dtos::responses::BookingCreatedResponse;
use crate::api::handlers::required;
use crate::domain::models::booking::{service_label, Booking, NewBookingParams};
use crate::domain::services::availability::{calculate_slots, day_bounds};
use crate::domain::services::calendar::confirmation_ics;
use crate::error::AppError;
use crate::infra::feeds::collect_busy;
use crate::state::AppState;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let client_name = required(&payload.client_name, "client_name")?.to_string();
    let client_email = required(&payload.client_email, "client_email")?.to_string();
    if !client_email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }
    let service_type = required(&payload.service_type, "service_type")?.to_string();
    let label = service_label(&service_type)
        .ok_or_else(|| AppError::Validation(format!("Unknown service type: {service_type}")))?;
    let start_raw = required(&payload.start_time, "start_time")?;
    let start_time = DateTime::parse_from_rfc3339(start_raw)
        .map_err(|_| AppError::Validation("Invalid start_time (expected RFC 3339)".into()))?
        .with_timezone(&Utc);

    let config = &state.config;
    let date = start_time.with_timezone(&config.timezone).date_naive();
    let (day_start, day_end) = day_bounds(date, config.timezone)
        .ok_or_else(|| AppError::Validation("Date is not a valid local day".into()))?;

    // Recompute the day's availability so a stale client cannot book a slot
    // that is no longer offered.
    let bookings = state.booking_repo.list_by_range(day_start, day_end).await?;
    let feeds = state.feed_repo.list().await?;
    let (busy, _) = collect_busy(&state.feed_reader, feeds, day_start, day_end).await;
    let slots = calculate_slots(
        date,
        config.timezone,
        config.work_start,
        config.work_end,
        config.slot_minutes,
        &bookings,
        &busy,
    );

    if !slots.contains(&start_time) {
        warn!("Booking rejected: slot {} is not offered", start_time.to_rfc3339());
        return Err(AppError::Conflict("Selected time slot is not available".into()));
    }

    let booking = Booking::new(NewBookingParams {
        client_name,
        client_email,
        service_type,
        start: start_time,
        duration_min: config.slot_minutes,
        note: payload.composed_note(),
    });

    let created = state.booking_repo.create_if_free(&booking).await?;
    info!("Booking confirmed: {} ({})", created.id, label);

    let ics = confirmation_ics(&created, label, &config.studio_location);
    let start_local = created.start_time.with_timezone(&config.timezone);
    let subject = format!("{} confirmed: {}", label, start_local.format("%d %B %Y, %H:%M"));
    let html = render_confirmation(&state, &created, label);

    // The confirmation email is best effort; the booking stands even when
    // the provider is down.
    if let Err(e) = state
        .email_service
        .send(&created.client_email, &subject, &html, Some("invite.ics"), Some(ics.as_bytes()))
        .await
    {
        warn!("Confirmation email for booking {} failed: {}", created.id, e);
    }

    Ok(Json(BookingCreatedResponse { booking: created, ics: Some(ics) }))
}

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_all().await?;
    Ok(Json(bookings))
}

pub async fn download_invite(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let label = service_label(&booking.service_type).unwrap_or("Studio Session");
    let ics = confirmation_ics(&booking, label, &state.config.studio_location);

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"booking-{}.ics\"", booking.id),
            ),
        ],
        ics,
    ))
}

fn render_confirmation(state: &AppState, booking: &Booking, service: &str) -> String {
    let config = &state.config;
    let start_local = booking.start_time.with_timezone(&config.timezone);

    let mut context = tera::Context::new();
    context.insert("client_name", &booking.client_name);
    context.insert("service", service);
    context.insert("start_local", &start_local.format("%A, %d %B %Y at %H:%M %Z").to_string());
    context.insert("location", &config.studio_location);
    context.insert("studio_name", &config.studio_name);

    match state.templates.render("confirmation.html", &context) {
        Ok(html) => html,
        Err(e) => {
            warn!("Confirmation template render failed: {}", e);
            format!(
                "<p>Hi {}, your {} booking on {} is confirmed.</p>",
                booking.client_name,
                service,
                start_local.format("%d %B %Y at %H:%M"),
            )
        }
    }
}
