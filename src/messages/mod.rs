//! Destination-specific notification payloads

pub mod slack;
pub mod teams;

use serde_json::Value;

use crate::core::models::{ArticleEvent, DestinationKind, NotifierConfig, SummaryResult};

/// Format one enriched article for the notifier's destination.
#[must_use]
pub fn format_notification(
    notifier: &NotifierConfig,
    event: &ArticleEvent,
    summary: &SummaryResult,
) -> Value {
    match notifier.destination {
        DestinationKind::Slack => slack::create_text_payload(event, summary, &notifier.share_text),
        DestinationKind::Teams => teams::create_card_payload(event, summary),
    }
}
