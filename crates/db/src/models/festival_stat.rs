//! Festival statistic models and DTOs (timeline entries per edition).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::record::{ContentTable, Record};

/// Table-specific columns of `festival_stats`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FestivalStatFields {
    /// Edition label, e.g. `2024` or `2018-2020`.
    pub year: String,
    pub participants: Option<i32>,
    pub title_pt: Option<String>,
    pub title_en: Option<String>,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
}

/// A row from the `festival_stats` table.
pub type FestivalStat = Record<FestivalStatFields>;

/// Marker for the `festival_stats` table.
pub struct FestivalStats;

impl ContentTable for FestivalStats {
    type Fields = FestivalStatFields;
    const TABLE: &'static str = "festival_stats";
    const ENTITY: &'static str = "FestivalStat";
    const FIELD_COLUMNS: &'static str =
        "year, participants, title_pt, title_en, description_pt, description_en";
    const LIST_ORDER: &'static str = "display_order, id";
}

/// DTO for creating a festival stat.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFestivalStat {
    pub year: String,
    pub participants: Option<i32>,
    pub title_pt: Option<String>,
    pub title_en: Option<String>,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for partially updating a festival stat.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFestivalStat {
    pub year: Option<String>,
    pub participants: Option<i32>,
    pub title_pt: Option<String>,
    pub title_en: Option<String>,
    pub description_pt: Option<String>,
    pub description_en: Option<String>,
    pub display_order: Option<i32>,
}
