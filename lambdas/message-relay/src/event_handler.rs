use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{Error, LambdaEvent, tracing};
use relay_core::{
    aws::aws_config,
    config,
    relay::relay_message,
    storage::S3ObjectStore,
    traced::Traced,
    workflow::SfnTaskCallback,
};
use tokio::sync::OnceCell;

static DEPENDENCIES: OnceCell<Dependencies> = OnceCell::const_new();

pub struct Dependencies {
    pub storage: Traced<S3ObjectStore>,
    pub workflow: Traced<SfnTaskCallback>,
}

async fn dependencies() -> Result<Dependencies, Box<dyn std::error::Error + Send + Sync>> {
    let aws_config = aws_config().await;

    // Create the S3 client for the destination bucket
    let storage = S3ObjectStore::new(aws_sdk_s3::Client::new(&aws_config), config::DEST_BUCKET);

    // Create the Step Functions client used to complete callback tasks
    let workflow = SfnTaskCallback::new(aws_sdk_sfn::Client::new(&aws_config));

    Ok(Dependencies {
        storage: Traced::new(storage),
        workflow: Traced::new(workflow),
    })
}

pub(crate) async fn outer_function_handler(event: LambdaEvent<SqsEvent>) -> Result<(), Error> {
    let dependencies = DEPENDENCIES.get_or_try_init(dependencies).await?;
    function_handler(event, dependencies).await
}

async fn function_handler(
    event: LambdaEvent<SqsEvent>,
    dependencies: &Dependencies,
) -> Result<(), Error> {
    // One message per invocation; the trigger is configured without batching
    let record = match event.payload.records.into_iter().next() {
        Some(record) => record,
        None => {
            tracing::warn!("received an event with no records");
            return Ok(());
        }
    };

    // A record without a body cannot decode, same as a malformed one
    let body = record.body.unwrap_or_default();

    let relayed = relay_message(&dependencies.storage, &dependencies.workflow, &body).await?;

    tracing::info!(key = %relayed.object_key, "relayed message");

    Ok(())
}
