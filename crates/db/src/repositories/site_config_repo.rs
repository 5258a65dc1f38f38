//! Repository for the `site_configs` table.

use sqlx::PgPool;

use crate::models::record::record_columns;
use crate::models::site_config::{SiteConfig, SiteConfigs, UpsertSiteConfig};

/// Provides the keyed upsert for configuration entries.
pub struct SiteConfigRepo;

impl SiteConfigRepo {
    /// Insert a configuration entry, or update it in place when the key
    /// already exists.
    ///
    /// Uses `ON CONFLICT (config_key) DO UPDATE` so there is exactly one row
    /// per key. Omitted values keep their stored value, and a soft-deleted
    /// entry is reactivated.
    pub async fn upsert(pool: &PgPool, input: &UpsertSiteConfig) -> Result<SiteConfig, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_configs \
                 (config_key, value_pt, value_en, description, display_order) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 0)) \
             ON CONFLICT (config_key) DO UPDATE SET \
                 value_pt = COALESCE($2, site_configs.value_pt), \
                 value_en = COALESCE($3, site_configs.value_en), \
                 description = COALESCE($4, site_configs.description), \
                 display_order = COALESCE($5, site_configs.display_order), \
                 is_active = true \
             RETURNING {}",
            record_columns::<SiteConfigs>()
        );
        sqlx::query_as::<_, SiteConfig>(&query)
            .bind(&input.config_key)
            .bind(&input.value_pt)
            .bind(&input.value_en)
            .bind(&input.description)
            .bind(input.display_order)
            .fetch_one(pool)
            .await
    }
}
