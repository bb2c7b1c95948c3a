use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgConnectOptions, PgPoolOptions}, sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions}};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use tera::Tera;
use tracing::info;
use tracing::log::LevelFilter;

use crate::api::rate_limit::RateLimiter;
use crate::config::Config;
use crate::infra::email::http_email_service::HttpEmailService;
use crate::infra::feeds::http_feed_reader::HttpFeedReader;
use crate::infra::repositories::{
    postgres_booking_repo::PostgresBookingRepo, postgres_feed_repo::PostgresFeedRepo,
    sqlite_booking_repo::SqliteBookingRepo, sqlite_feed_repo::SqliteFeedRepo,
};
use crate::infra::webhook::slack::SlackNotifier;
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    let email_service = Arc::new(HttpEmailService::new(
        config.mail_api_url.clone(),
        config.mail_api_key.clone(),
        config.mail_from.clone(),
    ));
    let feed_reader = Arc::new(HttpFeedReader::new(
        Duration::from_secs(config.feed_timeout_secs),
        config.timezone,
    ));
    let contact_notifier = Arc::new(SlackNotifier::new(config.slack_webhook_url.clone()));
    let rate_limiter = Arc::new(RateLimiter::default());

    let mut tera = Tera::default();
    tera.add_raw_template("confirmation.html", include_str!("../templates/confirmation.html"))
        .expect("Failed to load confirmation template");
    let templates = Arc::new(tera);

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(PostgresBookingRepo::new(pool.clone())),
            feed_repo: Arc::new(PostgresFeedRepo::new(pool)),
            email_service,
            feed_reader,
            contact_notifier,
            rate_limiter,
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            feed_repo: Arc::new(SqliteFeedRepo::new(pool)),
            email_service,
            feed_reader,
            contact_notifier,
            rate_limiter,
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
