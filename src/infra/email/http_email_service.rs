use crate::domain::ports::EmailService;
use crate::error::AppError;
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::Serialize;
use tracing::{error, warn};

pub struct HttpEmailService {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
}

impl HttpEmailService {
    pub fn new(api_url: String, api_key: Option<String>, from: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            from,
        }
    }
}

#[derive(Serialize)]
struct AttachmentPayload {
    filename: String,
    content: String,
}

#[derive(Serialize)]
struct EmailPayload {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
    attachments: Vec<AttachmentPayload>,
}

#[async_trait]
impl EmailService for HttpEmailService {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: &str,
        attachment_name: Option<&str>,
        attachment_data: Option<&[u8]>,
    ) -> Result<(), AppError> {
        // Unconfigured environments degrade to a no-op instead of failing
        // the booking flow.
        let Some(api_key) = &self.api_key else {
            warn!("MAIL_API_KEY not set, skipping email to {}", recipient);
            return Ok(());
        };

        let mut attachments = Vec::new();
        if let (Some(name), Some(data)) = (attachment_name, attachment_data) {
            attachments.push(AttachmentPayload {
                filename: name.to_string(),
                content: general_purpose::STANDARD.encode(data),
            });
        }

        let payload = EmailPayload {
            from: self.from.clone(),
            to: vec![recipient.to_string()],
            subject: subject.to_string(),
            html: html_body.to_string(),
            attachments,
        };

        let res = self.client.post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                let msg = format!("Email service connection error: {}", e);
                error!("{}", msg);
                AppError::Upstream(msg)
            })?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let msg = format!("Email service failed. Status: {}, Body: {}", status, text);
            error!("{}", msg);
            return Err(AppError::Upstream(msg));
        }

        Ok(())
    }
}
