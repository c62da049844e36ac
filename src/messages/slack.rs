//! Slack incoming-webhook payloads.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::{Value, json};

use crate::core::models::{ArticleEvent, ShareText, SummaryResult};

/// Everything except RFC 3986 unreserved characters and `/` gets escaped.
const SHARE_QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

const SHARE_INTENT_URL: &str = "https://x.com/intent/tweet";

/// Build the X compose link carrying the article URL and the social text.
#[must_use]
pub fn share_link(article_url: &str, social_text: &str) -> String {
    format!(
        "{SHARE_INTENT_URL}?url={}&text={}",
        utf8_percent_encode(article_url, SHARE_QUERY),
        utf8_percent_encode(social_text, SHARE_QUERY)
    )
}

/// A post must stay on one line to be usable as a compose prefill.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

/// Build the plain-text payload for a Slack incoming webhook.
///
/// The share link carries the social text wrapped in the notifier's prefix and suffix.
///
/// # Examples
///
/// ```
/// use notify_to_app::core::models::{ArticleEvent, ShareText, SummaryResult};
/// use notify_to_app::messages::slack::create_text_payload;
///
/// let event = ArticleEvent {
///     category: "Compute".into(),
///     published_at: "2024-01-01T00:00:00Z".into(),
///     title: "New Instance Type".into(),
///     url: "https://example.com/post".into(),
///     notifier_name: "teamA".into(),
/// };
/// let summary = SummaryResult {
///     summary: "A new instance type was announced.".into(),
///     detail: "- benefit one\n".into(),
///     social_text: "New instance type launched.".into(),
/// };
/// let payload = create_text_payload(&event, &summary, &ShareText::default());
/// assert!(payload["text"].as_str().unwrap().contains("<https://example.com/post|New Instance Type>"));
/// ```
#[must_use]
pub fn create_text_payload(
    event: &ArticleEvent,
    summary: &SummaryResult,
    share_text: &ShareText,
) -> Value {
    let social_text = single_line(&share_text.decorate(&summary.social_text));
    json!({
        "text": format!(
            "{}\n<{}|{}>\n{}\n{}\n<{}|Share on X>",
            event.published_at,
            event.url,
            event.title,
            summary.summary,
            summary.detail,
            share_link(&event.url, &social_text)
        )
    })
}
