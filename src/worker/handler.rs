use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use super::dispatch::Dispatcher;
use super::records::stream_records;

/// Lambda handler for the DynamoDB stream trigger.
///
/// Always returns `Ok(())`; per-item failures are logged by the dispatcher.
///
/// # Errors
///
/// Never; the `Result` is what `lambda_runtime` expects.
pub async fn function_handler(
    dispatcher: &Dispatcher,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    let correlation_id = Uuid::new_v4();
    let span = info_span!(
        "invocation",
        corr_id = %correlation_id,
        request_id = %event.context.request_id
    );

    async {
        let records = stream_records(&event.payload);
        info!("Received {} stream records", records.len());
        let report = dispatcher.run(records).await;
        info!(
            received = report.received,
            skipped = report.skipped,
            delivered = report.delivered,
            failed = report.failed,
            "Batch finished"
        );
    }
    .instrument(span)
    .await;

    Ok(())
}

pub use self::function_handler as handler;
