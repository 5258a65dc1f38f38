//! Backend selection.

/// Where uploaded objects are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Files under `root_dir`.
    Local { root_dir: String },
    /// An S3 bucket. `endpoint` points at an S3-compatible service
    /// (MinIO, R2, ...) and switches to path-style addressing.
    S3 {
        bucket: String,
        region: String,
        endpoint: Option<String>,
    },
}

/// Object storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Base URL prepended to keys to form public URLs. For S3 without an
    /// explicit base, the bucket URL is derived from bucket and region.
    pub public_url: Option<String>,
}

impl StorageConfig {
    /// Local storage under `root_dir`, published at `/uploads`.
    pub fn local(root_dir: impl Into<String>) -> Self {
        Self {
            backend: StorageBackend::Local {
                root_dir: root_dir.into(),
            },
            public_url: Some("/uploads".to_string()),
        }
    }

    /// The local root directory, if the local backend is selected.
    pub fn local_root(&self) -> Option<&str> {
        match &self.backend {
            StorageBackend::Local { root_dir } => Some(root_dir),
            StorageBackend::S3 { .. } => None,
        }
    }
}
