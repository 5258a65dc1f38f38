//! Repository for the `media_files` table.

use canjala_core::types::DbId;
use sqlx::PgPool;

use crate::models::media_file::{CreateMediaFile, MediaFile, MediaFiles, UpdateMediaFile};
use crate::models::record::{record_columns, ContentTable};

/// Provides inserts, patches and section filtering for media files.
pub struct MediaFileRepo;

impl MediaFileRepo {
    /// Record a stored object, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMediaFile) -> Result<MediaFile, sqlx::Error> {
        let query = format!(
            "INSERT INTO media_files \
                 (file_key, url, file_name, file_type, mime_type, file_size, \
                  caption_pt, caption_en, alt_text_pt, alt_text_en, section, \
                  display_order, uploaded_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, COALESCE($12, 0), $13) \
             RETURNING {}",
            record_columns::<MediaFiles>()
        );
        sqlx::query_as::<_, MediaFile>(&query)
            .bind(&input.file_key)
            .bind(&input.url)
            .bind(&input.file_name)
            .bind(input.file_type.as_str())
            .bind(&input.mime_type)
            .bind(input.file_size)
            .bind(&input.caption_pt)
            .bind(&input.caption_en)
            .bind(&input.alt_text_pt)
            .bind(&input.alt_text_en)
            .bind(&input.section)
            .bind(input.display_order)
            .bind(input.uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// List active media in one site section, in presentation order.
    pub async fn list_in_section(
        pool: &PgPool,
        section: &str,
    ) -> Result<Vec<MediaFile>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM media_files \
             WHERE is_active = true AND section = $1 \
             ORDER BY {}",
            record_columns::<MediaFiles>(),
            MediaFiles::LIST_ORDER
        );
        sqlx::query_as::<_, MediaFile>(&query)
            .bind(section)
            .fetch_all(pool)
            .await
    }

    /// Update presentation metadata. Only non-`None` fields are applied;
    /// the stored object itself is immutable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMediaFile,
    ) -> Result<Option<MediaFile>, sqlx::Error> {
        let query = format!(
            "UPDATE media_files SET \
                 section = COALESCE($2, section), \
                 caption_pt = COALESCE($3, caption_pt), \
                 caption_en = COALESCE($4, caption_en), \
                 alt_text_pt = COALESCE($5, alt_text_pt), \
                 alt_text_en = COALESCE($6, alt_text_en), \
                 display_order = COALESCE($7, display_order) \
             WHERE id = $1 \
             RETURNING {}",
            record_columns::<MediaFiles>()
        );
        sqlx::query_as::<_, MediaFile>(&query)
            .bind(id)
            .bind(&input.section)
            .bind(&input.caption_pt)
            .bind(&input.caption_en)
            .bind(&input.alt_text_pt)
            .bind(&input.alt_text_en)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }
}
