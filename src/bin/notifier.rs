use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use notify_to_app::core::config::AppConfig;
use notify_to_app::worker::{build_dispatcher, handler};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    notify_to_app::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let dispatcher = Arc::new(build_dispatcher(Arc::new(config)).await?);

    run(service_fn(move |event: LambdaEvent<Value>| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { handler(&dispatcher, event).await }
    }))
    .await
}
