use studio_backend::{
    api::rate_limit::RateLimiter,
    api::router::create_router,
    config::Config,
    domain::models::feed::{BusyInterval, CalendarFeed},
    domain::ports::{ContactNotifier, EmailService, FeedReader},
    error::AppError,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_feed_repo::SqliteFeedRepo,
    },
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use chrono::{DateTime, NaiveTime, Utc};
use serde_json::Value;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tera::Tera;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub attachment_name: Option<String>,
}

#[derive(Default)]
pub struct RecordingEmailService {
    pub sent: Mutex<Vec<SentEmail>>,
}

#[async_trait]
impl EmailService for RecordingEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        _html_body: &str,
        attachment_name: Option<&str>,
        _attachment_data: Option<&[u8]>,
    ) -> Result<(), AppError> {
        self.sent.lock().unwrap().push(SentEmail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            attachment_name: attachment_name.map(|n| n.to_string()),
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notes: Mutex<Vec<String>>,
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), AppError> {
        self.notes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Feed reader stub: returns the configured intervals for every feed, or
/// fails every fetch when `fail` is set.
pub struct StubFeedReader {
    pub busy: Vec<BusyInterval>,
    pub fail: bool,
}

#[async_trait]
impl FeedReader for StubFeedReader {
    async fn fetch_busy(
        &self,
        _feed: &CalendarFeed,
        _day_start: DateTime<Utc>,
        _day_end: DateTime<Utc>,
    ) -> Result<Vec<BusyInterval>, AppError> {
        if self.fail {
            return Err(AppError::Upstream("connection refused".into()));
        }
        Ok(self.busy.clone())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub emails: Arc<RecordingEmailService>,
    pub contacts: Arc<RecordingNotifier>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_reader(Arc::new(StubFeedReader { busy: vec![], fail: false })).await
    }

    pub async fn with_reader(feed_reader: Arc<dyn FeedReader>) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template(
            "confirmation.html",
            "<html>Confirmation for {{ client_name }}: {{ service }} at {{ start_local }}</html>",
        )
        .unwrap();

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            mail_api_url: "http://localhost".to_string(),
            mail_api_key: Some("test-key".to_string()),
            mail_from: "Studio <bookings@studio.test>".to_string(),
            slack_webhook_url: None,
            studio_name: "The Studio".to_string(),
            studio_location: "The Studio".to_string(),
            timezone: chrono_tz::UTC,
            work_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            work_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            slot_minutes: 60,
            feed_timeout_secs: 1,
        };

        let emails = Arc::new(RecordingEmailService::default());
        let contacts = Arc::new(RecordingNotifier::default());

        let state = Arc::new(AppState {
            config,
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            feed_repo: Arc::new(SqliteFeedRepo::new(pool.clone())),
            email_service: emails.clone(),
            feed_reader,
            contact_notifier: contacts.clone(),
            rate_limiter: Arc::new(RateLimiter::default()),
            templates: Arc::new(tera),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            emails,
            contacts,
        }
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("GET").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }

    pub async fn post(&self, uri: &str, body: Value) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("POST").uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())).unwrap()
        ).await.unwrap()
    }

    pub async fn delete(&self, uri: &str) -> axum::response::Response {
        self.router.clone().oneshot(
            Request::builder().method("DELETE").uri(uri)
                .body(Body::empty()).unwrap()
        ).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
