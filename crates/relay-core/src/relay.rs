use serde_json::Value;

use crate::error::RelayError;
use crate::keys;
use crate::record;
use crate::storage::ObjectStore;
use crate::workflow::{SUCCESS_OUTPUT, TaskCallback};

/// Outcome of a successfully relayed message.
#[derive(Debug)]
pub struct RelayedMessage {
    /// Key the derived record was written under.
    pub object_key: String,
    /// Whether the inbound body carried a continuation token.
    pub had_task_token: bool,
}

/// Relay one queued message: decode the body, write the derived record,
/// then report success of the paused workflow step.
///
/// The callback is only attempted after the write has completed; a storage
/// failure aborts the relay. A callback failure leaves the written object
/// in place.
#[tracing::instrument(skip_all)]
pub async fn relay_message(
    store: &impl ObjectStore,
    callback: &impl TaskCallback,
    body: &str,
) -> Result<RelayedMessage, RelayError> {
    let body = record::decode_body(body)?;
    let derived = record::derive_record(&body);

    let key = keys::object_key();
    tracing::info!(%key, "uploading derived record to bucket");
    store
        .put_record(&key, Value::Object(derived).to_string().into_bytes())
        .await?;

    let task_token = record::task_token(&body);
    if task_token.is_none() {
        tracing::warn!("inbound message carried no task token");
    }

    tracing::info!("completing workflow callback task");
    callback.report_success(task_token, SUCCESS_OUTPUT).await?;

    Ok(RelayedMessage {
        object_key: key,
        had_task_token: task_token.is_some(),
    })
}
