use std::collections::HashMap;
use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::models::{NotifierConfig, SummarizerConfig};
use crate::errors::NotifierError;

/// Default pause between two webhook deliveries.
pub const DEFAULT_PACE: Duration = Duration::from_millis(500);

/// Process-wide configuration, loaded once per cold start.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_id: String,
    pub model_region: String,
    pub notifiers: HashMap<String, NotifierConfig>,
    pub summarizers: HashMap<String, SummarizerConfig>,
    pub pace: Duration,
    /// Role to assume before invoking the model, for cross-account Bedrock access.
    pub bedrock_assume_role: Option<String>,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or cannot be parsed.
    pub fn from_env() -> Result<Self, NotifierError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required key is missing or cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NotifierError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| NotifierError::ConfigError(format!("{key}: not set")))
        };

        let pace = match lookup("NOTIFY_PACE_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| NotifierError::ConfigError(format!("NOTIFY_PACE_MS: {e}")))?,
            None => DEFAULT_PACE,
        };

        Ok(Self {
            model_id: required("MODEL_ID")?,
            model_region: required("MODEL_REGION")?,
            notifiers: parse_json_map("NOTIFIERS", &required("NOTIFIERS")?)?,
            summarizers: parse_json_map("SUMMARIZERS", &required("SUMMARIZERS")?)?,
            pace,
            bedrock_assume_role: lookup("BEDROCK_ASSUME_ROLE")
                .map(|role| role.trim().to_string())
                .filter(|role| !role.is_empty()),
        })
    }

    /// # Errors
    ///
    /// Returns `UnknownNotifier` when no notifier has that name.
    pub fn notifier(&self, name: &str) -> Result<&NotifierConfig, NotifierError> {
        self.notifiers
            .get(name)
            .ok_or_else(|| NotifierError::UnknownNotifier(name.to_string()))
    }

    /// # Errors
    ///
    /// Returns `UnknownSummarizer` when no summarizer has that name.
    pub fn summarizer(&self, name: &str) -> Result<&SummarizerConfig, NotifierError> {
        self.summarizers
            .get(name)
            .ok_or_else(|| NotifierError::UnknownSummarizer(name.to_string()))
    }
}

fn parse_json_map<T: DeserializeOwned>(
    key: &str,
    raw: &str,
) -> Result<HashMap<String, T>, NotifierError> {
    serde_json::from_str(raw).map_err(|e| NotifierError::ConfigError(format!("{key}: {e}")))
}
