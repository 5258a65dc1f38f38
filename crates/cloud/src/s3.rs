//! S3-backed object store.

use async_trait::async_trait;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;

use crate::error::StorageError;
use crate::object_store::{public_url_for, ObjectStore};

/// Stores objects in a single S3 bucket. Credentials come from the standard
/// AWS provider chain (environment, profile, instance role).
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_url: String,
}

impl S3ObjectStore {
    /// Build a client for `bucket` in `region`.
    ///
    /// With `endpoint` set, requests go to that S3-compatible service using
    /// path-style addressing.
    pub async fn connect(
        bucket: String,
        region: String,
        endpoint: Option<String>,
        public_url: Option<String>,
    ) -> Result<Self, StorageError> {
        if bucket.trim().is_empty() {
            return Err(StorageError::Config("S3 bucket name is empty".into()));
        }

        let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(region.clone()))
            .load()
            .await;

        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        let client = Client::from_conf(builder.build());

        let public_url = public_url
            .unwrap_or_else(|| default_public_url(&bucket, &region, endpoint.as_deref()));

        tracing::info!(%bucket, %region, endpoint = ?endpoint, "S3 object store configured");
        Ok(Self {
            client,
            bucket,
            public_url,
        })
    }
}

/// Public bucket URL when none is configured explicitly.
fn default_public_url(bucket: &str, region: &str, endpoint: Option<&str>) -> String {
    match endpoint {
        Some(endpoint) => format!("{}/{bucket}", endpoint.trim_end_matches('/')),
        None => format!("https://{bucket}.s3.{region}.amazonaws.com"),
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let size = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| StorageError::Backend(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!(bucket = %self.bucket, key, size, "Stored object in S3");
        Ok(public_url_for(&self.public_url, key))
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Backend(DisplayErrorContext(&e).to_string()))?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "s3"
    }
}
