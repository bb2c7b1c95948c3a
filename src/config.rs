use chrono::NaiveTime;
use chrono_tz::Tz;
use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub mail_api_url: String,
    pub mail_api_key: Option<String>,
    pub mail_from: String,
    pub slack_webhook_url: Option<String>,
    pub studio_name: String,
    pub studio_location: String,
    pub timezone: Tz,
    pub work_start: NaiveTime,
    pub work_end: NaiveTime,
    pub slot_minutes: i64,
    pub feed_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            mail_api_url: env::var("MAIL_API_URL").unwrap_or_else(|_| "https://api.resend.com/emails".to_string()),
            mail_api_key: env::var("MAIL_API_KEY").ok().filter(|k| !k.is_empty()),
            mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| "Studio Bookings <bookings@studio.local>".to_string()),
            slack_webhook_url: env::var("SLACK_WEBHOOK_URL").ok().filter(|u| !u.is_empty()),
            studio_name: env::var("STUDIO_NAME").unwrap_or_else(|_| "The Studio".to_string()),
            studio_location: env::var("STUDIO_LOCATION").unwrap_or_else(|_| "The Studio".to_string()),
            timezone: env::var("STUDIO_TIMEZONE")
                .unwrap_or_else(|_| "UTC".to_string())
                .parse()
                .expect("STUDIO_TIMEZONE must be a valid IANA timezone"),
            work_start: NaiveTime::parse_from_str(
                &env::var("WORK_START").unwrap_or_else(|_| "09:00".to_string()),
                "%H:%M",
            ).expect("WORK_START must be HH:MM"),
            work_end: NaiveTime::parse_from_str(
                &env::var("WORK_END").unwrap_or_else(|_| "17:00".to_string()),
                "%H:%M",
            ).expect("WORK_END must be HH:MM"),
            slot_minutes: env::var("SLOT_MINUTES").unwrap_or_else(|_| "60".to_string()).parse().expect("SLOT_MINUTES must be a number"),
            feed_timeout_secs: env::var("FEED_TIMEOUT_SECS").unwrap_or_else(|_| "10".to_string()).parse().expect("FEED_TIMEOUT_SECS must be a number"),
        }
    }
}
