use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;

/// Content type label attached to every written record.
const RECORD_CONTENT_TYPE: &str = "text";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to write object to bucket")]
    Put(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Write access to the blob store holding derived records.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_record(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError>;
}

/// S3 backed [ObjectStore] writing into a fixed bucket.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_record(&self, key: &str, body: Vec<u8>) -> Result<(), StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(RECORD_CONTENT_TYPE)
            .send()
            .await
            .map(|_| ())
            .map_err(|error| StorageError::Put(Box::new(error)))
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::put_object::PutObjectOutput;
    use aws_smithy_mocks::{mock, mock_client};

    use super::*;

    #[tokio::test]
    async fn writes_record_with_plain_text_content_type() {
        let put_object_rule = mock!(aws_sdk_s3::Client::put_object)
            .match_requests(|request| {
                request.bucket() == Some("relay-test-bucket")
                    && request.key() == Some("some-key")
                    && request.content_type() == Some(RECORD_CONTENT_TYPE)
            })
            .then_output(|| PutObjectOutput::builder().build());

        let client = mock_client!(aws_sdk_s3, [&put_object_rule]);
        let store = S3ObjectStore::new(client, "relay-test-bucket");

        store
            .put_record("some-key", b"{}".to_vec())
            .await
            .expect("write should succeed");

        assert_eq!(put_object_rule.num_calls(), 1);
    }
}
