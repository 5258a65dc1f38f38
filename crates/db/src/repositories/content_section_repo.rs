//! Repository for the `content_sections` table.

use canjala_core::types::DbId;
use sqlx::PgPool;

use crate::models::content_section::{
    ContentSection, ContentSections, CreateContentSection, UpdateContentSection,
};
use crate::models::record::record_columns;

/// Provides inserts and patches for content sections. Listing, lookup and
/// soft delete go through `RecordRepo::<ContentSections>`.
pub struct ContentSectionRepo;

impl ContentSectionRepo {
    /// Insert a new section, returning the created row.
    ///
    /// Fails with a `uq_content_sections_section_key` violation when the
    /// key is taken, including by a soft-deleted row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContentSection,
    ) -> Result<ContentSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO content_sections \
                 (section_key, title_pt, title_en, content_pt, content_en, display_order) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0)) \
             RETURNING {}",
            record_columns::<ContentSections>()
        );
        sqlx::query_as::<_, ContentSection>(&query)
            .bind(&input.section_key)
            .bind(&input.title_pt)
            .bind(&input.title_en)
            .bind(&input.content_pt)
            .bind(&input.content_en)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Update a section. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContentSection,
    ) -> Result<Option<ContentSection>, sqlx::Error> {
        let query = format!(
            "UPDATE content_sections SET \
                 title_pt = COALESCE($2, title_pt), \
                 title_en = COALESCE($3, title_en), \
                 content_pt = COALESCE($4, content_pt), \
                 content_en = COALESCE($5, content_en), \
                 display_order = COALESCE($6, display_order) \
             WHERE id = $1 \
             RETURNING {}",
            record_columns::<ContentSections>()
        );
        sqlx::query_as::<_, ContentSection>(&query)
            .bind(id)
            .bind(&input.title_pt)
            .bind(&input.title_en)
            .bind(&input.content_pt)
            .bind(&input.content_en)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }
}
