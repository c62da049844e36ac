//! Parsing of DynamoDB stream records into article events.

use serde_json::Value;

use crate::core::models::ArticleEvent;
use crate::errors::NotifierError;

pub const INSERT_EVENT: &str = "INSERT";

/// Records carried by a stream invocation payload (`{"Records": [...]}`).
#[must_use]
pub fn stream_records(payload: &Value) -> &[Value] {
    payload
        .get("Records")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

#[must_use]
pub fn event_name(record: &Value) -> Option<&str> {
    record.get("eventName").and_then(Value::as_str)
}

#[must_use]
pub fn is_insert(record: &Value) -> bool {
    event_name(record) == Some(INSERT_EVENT)
}

/// Build an [`ArticleEvent`] from an `INSERT` record's new image.
///
/// Accepts the native stream shape (`dynamodb.NewImage` with `{"S": ..}`
/// attribute values) as well as a flattened `data` object of plain strings.
///
/// # Errors
///
/// Returns `RecordError` naming the first missing attribute.
pub fn parse_article(record: &Value) -> Result<ArticleEvent, NotifierError> {
    Ok(ArticleEvent {
        category: attribute(record, &["category"])?,
        published_at: attribute(record, &["pubtime"])?,
        title: attribute(record, &["title"])?,
        url: attribute(record, &["url"])?,
        notifier_name: attribute(record, &["notifier_name", "notifierName"])?,
    })
}

fn attribute(record: &Value, names: &[&str]) -> Result<String, NotifierError> {
    let new_image = record.get("dynamodb").and_then(|d| d.get("NewImage"));
    let flat = record.get("data");

    names
        .iter()
        .find_map(|name| {
            new_image
                .and_then(|image| image.get(*name))
                .and_then(|attr| attr.get("S"))
                .or_else(|| flat.and_then(|data| data.get(*name)))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
        .ok_or_else(|| NotifierError::RecordError(format!("missing attribute {}", names[0])))
}
