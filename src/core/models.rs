use serde::{Deserialize, Serialize};

/// A newly published article taken from an `INSERT` stream record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleEvent {
    pub category: String,
    /// Publish time as stored in the table; never parsed.
    pub published_at: String,
    pub title: String,
    pub url: String,
    pub notifier_name: String,
}

/// Which chat product a notifier posts to, which in turn decides the payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationKind {
    /// Plain `text` payload with Slack link markup.
    Slack,
    /// Collapsible Adaptive Card.
    Teams,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifierConfig {
    pub destination: DestinationKind,
    pub webhook_url_parameter_name: String,
    pub summarizer_name: String,
    #[serde(default)]
    pub share_text: ShareText,
}

/// Fixed text wrapped around the generated post in the Slack share link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareText {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl ShareText {
    #[must_use]
    pub fn decorate(&self, social_text: &str) -> String {
        format!("{}{social_text}{}", self.prefix, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizerConfig {
    pub output_language: String,
    pub persona: String,
}

/// The three sections pulled out of a model response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub summary: String,
    /// Bullet lines, each starting with `- `.
    pub detail: String,
    /// Short post for X, at most 200 characters when the model follows the rules.
    pub social_text: String,
}
