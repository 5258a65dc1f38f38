//! Media ingestion rules: type tags, payload decoding, storage key naming.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Root prefix for every uploaded object.
pub const MEDIA_KEY_PREFIX: &str = "media";

/// Standard alphabet, padding optional.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Longest file extension kept in a storage key.
const MAX_EXTENSION_LEN: usize = 10;

/// Media type tag, matching the `file_type` check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Database name value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }
}

/// Validate an uploaded file's client-supplied name (non-empty, <= 255 chars).
pub fn validate_file_name(file_name: &str) -> Result<(), CoreError> {
    if file_name.trim().is_empty() {
        return Err(CoreError::Validation("file_name must not be empty".into()));
    }
    if file_name.len() > 255 {
        return Err(CoreError::Validation(
            "file_name must be at most 255 characters".into(),
        ));
    }
    Ok(())
}

/// Decode a base64 upload payload.
///
/// Accepts either bare base64 or a `data:<mime>;base64,<payload>` URL as
/// produced by browser file readers. Padding is optional and ASCII
/// whitespace anywhere in the payload (line-wrapped MIME output) is skipped.
pub fn decode_payload(data: &str) -> Result<Vec<u8>, CoreError> {
    let data = data.trim();
    let encoded = match data.strip_prefix("data:") {
        Some(rest) => rest
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .ok_or_else(|| CoreError::Validation("data URL payload must be base64".into()))?,
        None => data,
    };
    let compact: Vec<u8> = encoded
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    PAYLOAD_ENGINE
        .decode(compact)
        .map_err(|e| CoreError::Validation(format!("data is not valid base64: {e}")))
}

/// Lowercased extension of `file_name`, if it has a usable one.
///
/// Extensions that are empty, too long, or contain anything other than
/// ASCII alphanumerics are dropped rather than copied into a storage key.
pub fn file_extension(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || ext.len() > MAX_EXTENSION_LEN {
        return None;
    }
    if !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Derive a fresh storage key: `media/<kind>s/<uuid>[.<ext>]`.
///
/// Keys are random, not content-addressed; uploading the same bytes twice
/// yields two objects.
pub fn storage_key(kind: MediaKind, file_name: &str) -> String {
    let id = Uuid::new_v4().simple();
    match file_extension(file_name) {
        Some(ext) => format!("{MEDIA_KEY_PREFIX}/{}s/{id}.{ext}", kind.as_str()),
        None => format!("{MEDIA_KEY_PREFIX}/{}s/{id}", kind.as_str()),
    }
}
