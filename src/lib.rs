//! notify-to-app - Posts AI-generated summaries of newly published articles to chat webhooks.
//!
//! A Lambda function subscribed to the article table's DynamoDB stream. For every
//! `INSERT` record it:
//! 1. fetches the article and extracts the text of its `<main>` region
//! 2. asks an Amazon Bedrock model for a summary, bullet-point detail and a short social post
//! 3. formats a Slack text message or a Teams Adaptive Card
//! 4. posts it to the notifier's webhook, whose URL lives in SSM Parameter Store
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution, triggered by DynamoDB Streams
//! - SSM Parameter Store for webhook URLs
//! - Bedrock Converse for text generation
//! - reqwest + scraper for article retrieval
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use notify_to_app::core::config::AppConfig;
//! use notify_to_app::worker::build_dispatcher;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     notify_to_app::setup_logging();
//!
//!     let config = Arc::new(AppConfig::from_env()?);
//!     let dispatcher = build_dispatcher(config).await?;
//!
//!     let payload: serde_json::Value = serde_json::from_str(r#"{"Records": []}"#)?;
//!     let report = dispatcher
//!         .run(notify_to_app::worker::records::stream_records(&payload))
//!         .await;
//!     println!("delivered {} notifications", report.delivered);
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod content;
pub mod core;
pub mod errors;
pub mod messages;
pub mod summarize;
pub mod worker;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Output goes to `CloudWatch` Logs. The level comes from `RUST_LOG` and
/// defaults to `info`. Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// notify_to_app::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
