use async_trait::async_trait;
use reqwest::Client as HttpClient;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{error, info};

use crate::errors::NotifierError;

/// Outbound webhook delivery.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn post(&self, webhook_url: &str, body: &Value) -> Result<(), NotifierError>;
}

pub struct HttpWebhook {
    http_client: HttpClient,
}

impl HttpWebhook {
    #[must_use]
    pub fn new(http_client: HttpClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl WebhookSink for HttpWebhook {
    async fn post(&self, webhook_url: &str, body: &Value) -> Result<(), NotifierError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self
            .http_client
            .post(webhook_url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| NotifierError::DeliveryError(format!("webhook request failed: {e}")))?;

        let status = resp.status();
        let body_text = resp
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());

        if !status.is_success() {
            error!("Webhook POST failed: status={} body={}", status, body_text);
            return Err(NotifierError::DeliveryError(format!(
                "webhook returned {status}"
            )));
        }

        info!("Webhook POST succeeded: status={} body={}", status, body_text);
        Ok(())
    }
}
