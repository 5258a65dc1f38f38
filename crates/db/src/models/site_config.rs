//! Site configuration models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::record::{ContentTable, KeyedTable, Record};

/// Table-specific columns of `site_configs`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteConfigFields {
    pub config_key: String,
    pub value_pt: Option<String>,
    pub value_en: Option<String>,
    pub description: Option<String>,
}

/// A row from the `site_configs` table.
pub type SiteConfig = Record<SiteConfigFields>;

/// Marker for the `site_configs` table.
pub struct SiteConfigs;

impl ContentTable for SiteConfigs {
    type Fields = SiteConfigFields;
    const TABLE: &'static str = "site_configs";
    const ENTITY: &'static str = "SiteConfig";
    const FIELD_COLUMNS: &'static str = "config_key, value_pt, value_en, description";
    const LIST_ORDER: &'static str = "display_order, config_key";
}

impl KeyedTable for SiteConfigs {
    const KEY_COLUMN: &'static str = "config_key";
}

/// DTO for inserting or updating a configuration entry by key.
///
/// On update, omitted values keep their stored value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSiteConfig {
    pub config_key: String,
    pub value_pt: Option<String>,
    pub value_en: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}
