use axum::{extract::State, http::HeaderMap, response::IntoResponse, Json};
use crate::api::dtos::requests::ContactRequest;
use crate::api::handlers::required;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, AppError> {
    let key = client_key(&headers);
    if !state.rate_limiter.check(&key) {
        return Err(AppError::RateLimited);
    }

    let name = required(&payload.name, "name")?;
    let email = required(&payload.email, "email")?;
    if !email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }
    let message = required(&payload.message, "message")?;

    let text = format!("New enquiry from {} <{}>\n{}", name, email, message);
    state.contact_notifier.notify(&text).await?;

    info!("Contact enquiry forwarded from {}", email);
    Ok(Json(serde_json::json!({ "status": "sent" })))
}

/// First hop of x-forwarded-for, falling back to a shared bucket when the
/// header is absent.
fn client_key(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
