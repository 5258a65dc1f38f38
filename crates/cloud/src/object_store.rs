use async_trait::async_trait;

use crate::error::StorageError;

/// Write-once blob storage addressed by slash-separated keys such as
/// `media/images/3f2a9c.jpg`.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key` and return the object's public URL.
    ///
    /// Writing an existing key overwrites it.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Remove the object under `key`. Removing a missing key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Short backend label for logs.
    fn backend_name(&self) -> &'static str;
}

/// Join a public base URL and a key with exactly one slash between them.
pub(crate) fn public_url_for(base: &str, key: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), key.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_joins_with_single_slash() {
        assert_eq!(
            public_url_for("https://cdn.example.com/", "media/images/a.jpg"),
            "https://cdn.example.com/media/images/a.jpg"
        );
        assert_eq!(public_url_for("/uploads", "/x.png"), "/uploads/x.png");
    }
}
