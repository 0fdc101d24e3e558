use std::time::Instant;

use async_trait::async_trait;
use tracing::Instrument;

use crate::storage::{ObjectStore, StorageError};
use crate::workflow::{CallbackError, TaskCallback};

/// Tracing decorator for the outbound service clients.
///
/// Wraps an [ObjectStore] or [TaskCallback] and records a span with call
/// metadata and elapsed time around each outbound call.
pub struct Traced<T> {
    inner: T,
}

impl<T> Traced<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: ObjectStore> ObjectStore for Traced<T> {
    async fn put_record(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        let span = tracing::info_span!("put_record", %key, bytes = body.len());
        let started = Instant::now();

        let result = self.inner.put_record(key, body).instrument(span).await;
        match &result {
            Ok(()) => tracing::info!(
                %key,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "wrote derived record"
            ),
            Err(error) => tracing::error!(?error, %key, "failed to write derived record"),
        }

        result
    }
}

#[async_trait]
impl<T: TaskCallback> TaskCallback for Traced<T> {
    async fn report_success(
        &self,
        task_token: Option<&str>,
        output: &str,
    ) -> Result<(), CallbackError> {
        let span = tracing::info_span!("report_success", token_present = task_token.is_some());
        let started = Instant::now();

        let result = self
            .inner
            .report_success(task_token, output)
            .instrument(span)
            .await;
        match &result {
            Ok(()) => tracing::info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "reported workflow task success"
            ),
            Err(error) => tracing::error!(?error, "failed to report workflow task success"),
        }

        result
    }
}
