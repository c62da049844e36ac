use std::sync::Arc;

use serde_json::Value;
use tracing::{Instrument, error, info, info_span};

use super::deliver::WebhookSink;
use super::records::{event_name, is_insert, parse_article};
use crate::content::ContentSource;
use crate::core::config::AppConfig;
use crate::core::models::ArticleEvent;
use crate::core::secrets::SecretStore;
use crate::errors::NotifierError;
use crate::messages::format_notification;
use crate::summarize::SummaryEngine;

/// Outcome counts for one batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub received: usize,
    /// `MODIFY` / `REMOVE` records.
    pub skipped: usize,
    pub delivered: usize,
    pub failed: usize,
}

/// A formatted message ready to post.
struct Outgoing {
    webhook_url: String,
    body: Value,
}

/// Runs fetch, summarize, format and deliver for every new article in a batch.
pub struct Dispatcher {
    config: Arc<AppConfig>,
    content: Box<dyn ContentSource>,
    engine: SummaryEngine,
    secrets: Box<dyn SecretStore>,
    webhook: Box<dyn WebhookSink>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(
        config: Arc<AppConfig>,
        content: Box<dyn ContentSource>,
        engine: SummaryEngine,
        secrets: Box<dyn SecretStore>,
        webhook: Box<dyn WebhookSink>,
    ) -> Self {
        Self {
            config,
            content,
            engine,
            secrets,
            webhook,
        }
    }

    /// Process the batch in order, one item at a time.
    ///
    /// A failing item is logged and counted; the remaining items are still processed.
    /// Consecutive webhook calls are separated by `config.pace`.
    pub async fn run(&self, records: &[Value]) -> BatchReport {
        let mut report = BatchReport {
            received: records.len(),
            ..BatchReport::default()
        };
        let mut posted_before = false;

        for record in records {
            if !is_insert(record) {
                info!(
                    "Skipping {} event",
                    event_name(record).unwrap_or("unnamed")
                );
                report.skipped += 1;
                continue;
            }

            let event = match parse_article(record) {
                Ok(event) => event,
                Err(e) => {
                    error!("Dropping record: {}; record={}", e, record);
                    report.failed += 1;
                    continue;
                }
            };

            let span = info_span!(
                "article",
                url = %event.url,
                notifier = %event.notifier_name
            );

            let result = async {
                let outgoing = self.prepare(&event).await?;
                if posted_before {
                    tokio::time::sleep(self.config.pace).await;
                }
                posted_before = true;
                info!("Delivering notification for {}", event.title);
                self.webhook.post(&outgoing.webhook_url, &outgoing.body).await
            }
            .instrument(span)
            .await;

            match result {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    error!(url = %event.url, "Failed to notify article: {}", e);
                    report.failed += 1;
                }
            }
        }

        report
    }

    async fn prepare(&self, event: &ArticleEvent) -> Result<Outgoing, NotifierError> {
        let notifier = self.config.notifier(&event.notifier_name)?;
        let summarizer = self.config.summarizer(&notifier.summarizer_name)?;
        let webhook_url = self
            .secrets
            .get_secret(&notifier.webhook_url_parameter_name)
            .await?;

        let content = self.content.fetch(&event.url).await.unwrap_or_default();
        let summary = self
            .engine
            .summarize(&content, &notifier.summarizer_name, summarizer)
            .await?;

        Ok(Outgoing {
            webhook_url,
            body: format_notification(notifier, event, &summary),
        })
    }
}
