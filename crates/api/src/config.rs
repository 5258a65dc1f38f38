use canjala_cloud::{StorageBackend, StorageConfig};

use crate::auth::jwt::JwtConfig;

/// Default request body cap (50 MiB), sized for base64-encoded video uploads.
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on graceful shutdown in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Largest accepted request body in bytes (default: 50 MiB).
    pub max_body_bytes: usize,
    /// Timeout for image proxy upstream fetches in seconds (default: `15`).
    pub proxy_timeout_secs: u64,
    /// JWT verification settings.
    pub jwt: JwtConfig,
    /// Object storage backend for media uploads.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `MAX_BODY_BYTES`       | `52428800`                 |
    /// | `PROXY_TIMEOUT_SECS`   | `15`                       |
    ///
    /// See [`JwtConfig::from_env`] and [`storage_from_env`] for the rest.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let max_body_bytes: usize = std::env::var("MAX_BODY_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_BODY_BYTES.to_string())
            .parse()
            .expect("MAX_BODY_BYTES must be a valid usize");

        let proxy_timeout_secs: u64 = std::env::var("PROXY_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("PROXY_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            max_body_bytes,
            proxy_timeout_secs,
            jwt: JwtConfig::from_env(),
            storage: storage_from_env(),
        }
    }
}

/// Load object storage settings from environment variables.
///
/// | Env Var              | Required      | Default      |
/// |----------------------|---------------|--------------|
/// | `STORAGE_BACKEND`    | no            | `local`      |
/// | `LOCAL_STORAGE_DIR`  | no            | `./uploads`  |
/// | `STORAGE_PUBLIC_URL` | no            | `/uploads` (local), bucket URL (s3) |
/// | `S3_BUCKET`          | **yes** (s3)  | --           |
/// | `S3_REGION`          | no            | `us-east-1`  |
/// | `S3_ENDPOINT`        | no            | AWS          |
///
/// # Panics
///
/// Panics on an unknown backend name or when `S3_BUCKET` is missing for the
/// `s3` backend.
pub fn storage_from_env() -> StorageConfig {
    let public_url = non_empty_var("STORAGE_PUBLIC_URL");
    let backend_name = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());

    match backend_name.as_str() {
        "local" => {
            let root_dir =
                non_empty_var("LOCAL_STORAGE_DIR").unwrap_or_else(|| "./uploads".into());
            let local = StorageConfig::local(root_dir);
            StorageConfig {
                public_url: public_url.or(local.public_url),
                backend: local.backend,
            }
        }
        "s3" => StorageConfig {
            backend: StorageBackend::S3 {
                bucket: non_empty_var("S3_BUCKET")
                    .expect("S3_BUCKET must be set when STORAGE_BACKEND=s3"),
                region: non_empty_var("S3_REGION").unwrap_or_else(|| "us-east-1".into()),
                endpoint: non_empty_var("S3_ENDPOINT"),
            },
            public_url,
        },
        other => panic!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
