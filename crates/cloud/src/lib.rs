//! Object storage for uploaded media.
//!
//! Binaries are written through the [`ObjectStore`] trait, which hands back
//! the public URL of the stored object. Two backends exist:
//!
//! - [`LocalObjectStore`] -- files under a directory on disk, served by the
//!   API at `/uploads`.
//! - [`S3ObjectStore`] -- an S3 (or S3-compatible) bucket.
//!
//! [`build_object_store`] picks the backend from a [`StorageConfig`].

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod local;
pub mod object_store;
pub mod s3;

pub use config::{StorageBackend, StorageConfig};
pub use error::StorageError;
pub use local::LocalObjectStore;
pub use object_store::ObjectStore;
pub use s3::S3ObjectStore;

/// Construct the configured backend.
pub async fn build_object_store(
    config: &StorageConfig,
) -> Result<Arc<dyn ObjectStore>, StorageError> {
    let store: Arc<dyn ObjectStore> = match &config.backend {
        StorageBackend::Local { root_dir } => Arc::new(
            LocalObjectStore::new(root_dir.clone(), config.public_url.clone()).await?,
        ),
        StorageBackend::S3 {
            bucket,
            region,
            endpoint,
        } => Arc::new(
            S3ObjectStore::connect(
                bucket.clone(),
                region.clone(),
                endpoint.clone(),
                config.public_url.clone(),
            )
            .await?,
        ),
    };
    Ok(store)
}
