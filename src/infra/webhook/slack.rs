use crate::domain::ports::ContactNotifier;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::warn;

/// Posts contact enquiries to a Slack incoming webhook. The call is bounded
/// at 3 seconds so a slow webhook cannot hold the request open.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(3);

pub struct SlackNotifier {
    client: Client,
    webhook_url: Option<String>,
}

impl SlackNotifier {
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl ContactNotifier for SlackNotifier {
    async fn notify(&self, text: &str) -> Result<(), AppError> {
        let Some(url) = &self.webhook_url else {
            warn!("SLACK_WEBHOOK_URL not set, dropping contact notification");
            return Ok(());
        };

        let res = self.client.post(url)
            .timeout(WEBHOOK_TIMEOUT)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Slack webhook error: {}", e)))?;

        if !res.status().is_success() {
            return Err(AppError::Upstream(format!(
                "Slack webhook returned status {}", res.status()
            )));
        }

        Ok(())
    }
}
