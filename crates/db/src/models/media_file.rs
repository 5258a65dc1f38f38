//! Media file models and DTOs.
//!
//! Binaries live in object storage; a `media_files` row records where
//! (`file_key`, `url`) plus bilingual captions and alt text.

use canjala_core::media::MediaKind;
use canjala_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::record::{ContentTable, Record};

/// Table-specific columns of `media_files`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MediaFileFields {
    pub file_key: String,
    pub url: String,
    pub file_name: String,
    /// `image` or `video`.
    pub file_type: String,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub caption_pt: Option<String>,
    pub caption_en: Option<String>,
    pub alt_text_pt: Option<String>,
    pub alt_text_en: Option<String>,
    pub section: Option<String>,
    pub uploaded_by: Option<DbId>,
}

/// A row from the `media_files` table.
pub type MediaFile = Record<MediaFileFields>;

/// Marker for the `media_files` table.
pub struct MediaFiles;

impl ContentTable for MediaFiles {
    type Fields = MediaFileFields;
    const TABLE: &'static str = "media_files";
    const ENTITY: &'static str = "MediaFile";
    const FIELD_COLUMNS: &'static str = "\
        file_key, url, file_name, file_type, mime_type, file_size, \
        caption_pt, caption_en, alt_text_pt, alt_text_en, section, uploaded_by";
    const LIST_ORDER: &'static str = "display_order, created_at DESC";
}

/// Metadata for a freshly stored object. Built by the upload handler after
/// the binary has been written to object storage.
#[derive(Debug, Clone)]
pub struct CreateMediaFile {
    pub file_key: String,
    pub url: String,
    pub file_name: String,
    pub file_type: MediaKind,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub caption_pt: Option<String>,
    pub caption_en: Option<String>,
    pub alt_text_pt: Option<String>,
    pub alt_text_en: Option<String>,
    pub section: Option<String>,
    pub display_order: Option<i32>,
    pub uploaded_by: Option<DbId>,
}

/// DTO for partially updating a media file's presentation metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMediaFile {
    pub section: Option<String>,
    pub caption_pt: Option<String>,
    pub caption_en: Option<String>,
    pub alt_text_pt: Option<String>,
    pub alt_text_en: Option<String>,
    pub display_order: Option<i32>,
}
