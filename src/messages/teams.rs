//! Teams Adaptive Card payloads.

use serde_json::{Value, json};

use crate::core::models::{ArticleEvent, SummaryResult};

pub const ADAPTIVE_CARD_CONTENT_TYPE: &str = "application/vnd.microsoft.card.adaptive";
pub const EXPANDED_ITEMS_ID: &str = "expandedItems";

/// Teams collapses bare newlines, so sentence breaks are turned into carriage returns.
#[must_use]
pub fn card_detail(detail: &str) -> String {
    detail.replace("。\n", "。\r")
}

/// Build a collapsible card: title and summary up front, detail behind "see more".
#[must_use]
pub fn create_card_payload(event: &ArticleEvent, summary: &SummaryResult) -> Value {
    let visible = json!({
        "type": "Container",
        "id": "collapsedItems",
        "items": [
            { "type": "TextBlock", "text": format!("**{}**", event.title) },
            { "type": "TextBlock", "wrap": true, "text": summary.summary }
        ]
    });

    let hidden = json!({
        "type": "Container",
        "id": EXPANDED_ITEMS_ID,
        "isVisible": false,
        "items": [
            { "type": "TextBlock", "wrap": true, "text": card_detail(&summary.detail) }
        ]
    });

    let toggle = json!({
        "type": "Container",
        "items": [{
            "type": "ColumnSet",
            "columns": [{
                "type": "Column",
                "width": "stretch",
                "items": [
                    {
                        "type": "TextBlock",
                        "text": "see less",
                        "id": "collapse",
                        "isVisible": false,
                        "wrap": true,
                        "color": "Accent"
                    },
                    {
                        "type": "TextBlock",
                        "text": "see more",
                        "id": "expand",
                        "wrap": true,
                        "color": "Accent"
                    }
                ]
            }],
            "selectAction": {
                "type": "Action.ToggleVisibility",
                "targetElements": ["collapse", "expand", EXPANDED_ITEMS_ID]
            }
        }]
    });

    json!({
        "type": "message",
        "attachments": [{
            "contentType": ADAPTIVE_CARD_CONTENT_TYPE,
            "content": {
                "type": "AdaptiveCard",
                "version": "1.3",
                "body": [
                    {
                        "type": "ColumnSet",
                        "columns": [{
                            "type": "Column",
                            "width": "auto",
                            "items": [visible, hidden]
                        }]
                    },
                    toggle
                ],
                "actions": [{
                    "type": "Action.OpenUrl",
                    "title": "Open Link",
                    "wrap": true,
                    "url": event.url
                }],
                "msteams": { "width": "Full" },
                "$schema": "http://adaptivecards.io/schemas/adaptive-card.json"
            }
        }]
    })
}
