//! Content section models and DTOs.
//!
//! A content section is a bilingual title/body block that fills one region
//! of the public site (e.g. `hero_title`, `about_description`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::record::{ContentTable, KeyedTable, Record};

/// Table-specific columns of `content_sections`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentSectionFields {
    pub section_key: String,
    pub title_pt: Option<String>,
    pub title_en: Option<String>,
    pub content_pt: Option<String>,
    pub content_en: Option<String>,
}

/// A row from the `content_sections` table.
pub type ContentSection = Record<ContentSectionFields>;

/// Marker for the `content_sections` table.
pub struct ContentSections;

impl ContentTable for ContentSections {
    type Fields = ContentSectionFields;
    const TABLE: &'static str = "content_sections";
    const ENTITY: &'static str = "ContentSection";
    const FIELD_COLUMNS: &'static str =
        "section_key, title_pt, title_en, content_pt, content_en";
    const LIST_ORDER: &'static str = "display_order, id";
}

impl KeyedTable for ContentSections {
    const KEY_COLUMN: &'static str = "section_key";
}

/// DTO for creating a new content section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentSection {
    pub section_key: String,
    pub title_pt: Option<String>,
    pub title_en: Option<String>,
    pub content_pt: Option<String>,
    pub content_en: Option<String>,
    pub display_order: Option<i32>,
}

/// DTO for partially updating a content section. The section key is
/// immutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContentSection {
    pub title_pt: Option<String>,
    pub title_en: Option<String>,
    pub content_pt: Option<String>,
    pub content_en: Option<String>,
    pub display_order: Option<i32>,
}
