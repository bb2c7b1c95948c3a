mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn booking_is_confirmed_with_invite_and_email() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/bookings", json!({
        "client_name": "Alice",
        "client_email": "alice@example.com",
        "service_type": "portrait-session",
        "start_time": "2025-06-10T14:00:00Z",
        "organization": "Acme",
        "goals": "Team headshots",
        "notes": "Natural light preferred"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body = parse_body(res).await;
    let booking = &body["booking"];

    assert_eq!(booking["status"], "CONFIRMED");
    assert_eq!(booking["client_email"], "alice@example.com");
    assert!(booking["start_time"].as_str().unwrap().contains("2025-06-10T14:00:00"));
    assert!(booking["end_time"].as_str().unwrap().contains("2025-06-10T15:00:00"));

    let note = booking["note"].as_str().unwrap();
    assert!(note.contains("Organization: Acme"));
    assert!(note.contains("Goals: Team headshots"));
    assert!(note.contains("Notes: Natural light preferred"));

    let ics = body["ics"].as_str().unwrap();
    assert!(ics.contains("DTSTART:20250610T140000Z"));
    assert!(ics.contains("DTEND:20250610T150000Z"));

    let sent = app.emails.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "alice@example.com");
    assert_eq!(sent[0].attachment_name.as_deref(), Some("invite.ics"));
}

#[tokio::test]
async fn missing_email_is_rejected_without_a_write() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/bookings", json!({
        "client_name": "Alice",
        "service_type": "discovery-call",
        "start_time": "2025-06-10T09:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.get("/api/v1/bookings").await;
    let body = parse_body(res).await;
    assert!(body.as_array().unwrap().is_empty());

    assert!(app.emails.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_service_type_is_rejected() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/bookings", json!({
        "client_name": "Alice",
        "client_email": "alice@example.com",
        "service_type": "wedding-video",
        "start_time": "2025-06-10T09:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn double_booking_the_same_slot_conflicts() {
    let app = TestApp::new().await;

    let payload = json!({
        "client_name": "Alice",
        "client_email": "alice@example.com",
        "service_type": "discovery-call",
        "start_time": "2025-06-10T11:00:00Z"
    });

    let res = app.post("/api/v1/bookings", payload.clone()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.post("/api/v1/bookings", payload).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let res = app.get("/api/v1/bookings").await;
    let body = parse_body(res).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn off_grid_start_time_is_not_offered() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/bookings", json!({
        "client_name": "Alice",
        "client_email": "alice@example.com",
        "service_type": "discovery-call",
        "start_time": "2025-06-10T10:30:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn outside_working_hours_is_not_offered() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/bookings", json!({
        "client_name": "Alice",
        "client_email": "alice@example.com",
        "service_type": "discovery-call",
        "start_time": "2025-06-10T08:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invite_can_be_downloaded_as_ics() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/bookings", json!({
        "client_name": "Alice",
        "client_email": "alice@example.com",
        "service_type": "podcast-recording",
        "start_time": "2025-06-10T12:00:00Z"
    })).await;
    let body = parse_body(res).await;
    let id = body["booking"]["id"].as_str().unwrap().to_string();

    let res = app.get(&format!("/api/v1/bookings/{}/invite.ics", id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/calendar"));

    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let ics = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(ics.contains("BEGIN:VCALENDAR"));
    assert!(ics.contains("DTSTART:20250610T120000Z"));
}

#[tokio::test]
async fn invite_for_unknown_booking_is_not_found() {
    let app = TestApp::new().await;

    let res = app.get("/api/v1/bookings/no-such-id/invite.ics").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
