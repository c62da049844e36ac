//! Stream-triggered worker: record parsing, dispatch, delivery

pub mod deliver;
pub mod dispatch;
pub mod handler;
pub mod records;

use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::ai::BedrockClient;
use crate::content::ContentFetcher;
use crate::core::config::AppConfig;
use crate::core::secrets::SsmSecretStore;
use crate::errors::NotifierError;
use crate::summarize::SummaryEngine;

// Re-exports for the bootstrap binary and tests
pub use deliver::{HttpWebhook, WebhookSink};
pub use dispatch::{BatchReport, Dispatcher};
pub use handler::handler;

/// Wire the AWS-backed collaborators into a [`Dispatcher`].
///
/// # Errors
///
/// Returns `HttpError` if an HTTP client cannot be built.
pub async fn build_dispatcher(config: Arc<AppConfig>) -> Result<Dispatcher, NotifierError> {
    let generator = BedrockClient::from_config(&config).await;
    let secrets = SsmSecretStore::from_env().await;

    Ok(Dispatcher::new(
        config,
        Box::new(ContentFetcher::new()?),
        SummaryEngine::new(Box::new(generator)),
        Box::new(secrets),
        Box::new(HttpWebhook::new(HttpClient::new())),
    ))
}
