use thiserror::Error;

use crate::storage::StorageError;
use crate::workflow::CallbackError;

/// Failure kinds of the relay. None are recovered locally; all propagate
/// and fail the invocation.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Inbound body was not a JSON object.
    #[error("failed to decode message body")]
    Decode(#[from] serde_json::Error),

    /// The blob write failed. The workflow callback is never attempted.
    #[error("failed to write derived record to storage")]
    Storage(#[from] StorageError),

    /// The completion report failed. The written object is not rolled back.
    #[error("failed to report task success to workflow")]
    Callback(#[from] CallbackError),
}
