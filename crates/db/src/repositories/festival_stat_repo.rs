//! Repository for the `festival_stats` table.

use canjala_core::types::DbId;
use sqlx::PgPool;

use crate::models::festival_stat::{
    CreateFestivalStat, FestivalStat, FestivalStats, UpdateFestivalStat,
};
use crate::models::record::record_columns;

/// Provides inserts and patches for festival stats.
pub struct FestivalStatRepo;

impl FestivalStatRepo {
    /// Insert a new stat, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFestivalStat,
    ) -> Result<FestivalStat, sqlx::Error> {
        let query = format!(
            "INSERT INTO festival_stats \
                 (year, participants, title_pt, title_en, description_pt, description_en, \
                  display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0)) \
             RETURNING {}",
            record_columns::<FestivalStats>()
        );
        sqlx::query_as::<_, FestivalStat>(&query)
            .bind(&input.year)
            .bind(input.participants)
            .bind(&input.title_pt)
            .bind(&input.title_en)
            .bind(&input.description_pt)
            .bind(&input.description_en)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }

    /// Update a stat. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFestivalStat,
    ) -> Result<Option<FestivalStat>, sqlx::Error> {
        let query = format!(
            "UPDATE festival_stats SET \
                 year = COALESCE($2, year), \
                 participants = COALESCE($3, participants), \
                 title_pt = COALESCE($4, title_pt), \
                 title_en = COALESCE($5, title_en), \
                 description_pt = COALESCE($6, description_pt), \
                 description_en = COALESCE($7, description_en), \
                 display_order = COALESCE($8, display_order) \
             WHERE id = $1 \
             RETURNING {}",
            record_columns::<FestivalStats>()
        );
        sqlx::query_as::<_, FestivalStat>(&query)
            .bind(id)
            .bind(&input.year)
            .bind(input.participants)
            .bind(&input.title_pt)
            .bind(&input.title_en)
            .bind(&input.description_pt)
            .bind(&input.description_en)
            .bind(input.display_order)
            .fetch_optional(pool)
            .await
    }
}
