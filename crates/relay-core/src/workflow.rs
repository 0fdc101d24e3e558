use async_trait::async_trait;
use thiserror::Error;

/// Output reported for a completed callback step. The orchestrator expects
/// valid JSON, hence the encoded string literal.
pub const SUCCESS_OUTPUT: &str = "\"Callback task completed successfully.\"";

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("failed to report task success to workflow")]
    SendTaskSuccess(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Completion reporting for paused workflow steps.
#[async_trait]
pub trait TaskCallback: Send + Sync {
    async fn report_success(
        &self,
        task_token: Option<&str>,
        output: &str,
    ) -> Result<(), CallbackError>;
}

/// Step Functions backed [TaskCallback].
///
/// A `None` token is passed through as an unset field; the client rejects
/// the request at send time and that surfaces as [CallbackError].
#[derive(Clone)]
pub struct SfnTaskCallback {
    client: aws_sdk_sfn::Client,
}

impl SfnTaskCallback {
    pub fn new(client: aws_sdk_sfn::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TaskCallback for SfnTaskCallback {
    async fn report_success(
        &self,
        task_token: Option<&str>,
        output: &str,
    ) -> Result<(), CallbackError> {
        self.client
            .send_task_success()
            .set_task_token(task_token.map(str::to_string))
            .output(output)
            .send()
            .await
            .map(|_| ())
            .map_err(|error| CallbackError::SendTaskSuccess(Box::new(error)))
    }
}
