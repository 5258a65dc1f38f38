//! The generic content entity shared by every CMS table.
//!
//! All four content tables carry the same lifecycle columns (`id`,
//! `is_active`, `display_order`, `created_at`, `updated_at`) around a
//! table-specific bilingual payload. [`Record`] models that shape once;
//! [`ContentTable`] describes how a table lays out its payload so listing,
//! lookup and soft-delete SQL can be written a single time in
//! [`crate::repositories::RecordRepo`].

use canjala_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

/// A content row: lifecycle columns plus the table's own `fields`.
///
/// `fields` is flattened when serialized, so API consumers see one flat
/// object per row.
#[derive(Debug, Clone, Serialize)]
pub struct Record<F> {
    pub id: DbId,
    #[serde(flatten)]
    pub fields: F,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl<'r, F> FromRow<'r, PgRow> for Record<F>
where
    F: FromRow<'r, PgRow>,
{
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            fields: F::from_row(row)?,
            is_active: row.try_get("is_active")?,
            display_order: row.try_get("display_order")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Static description of a content table.
pub trait ContentTable {
    /// Table-specific columns, decoded from the same row as the record.
    type Fields: for<'r> FromRow<'r, PgRow> + Send + Unpin;

    /// SQL table name.
    const TABLE: &'static str;

    /// Entity label used in not-found errors and logs.
    const ENTITY: &'static str;

    /// Comma-separated list of the columns decoded into [`Self::Fields`].
    const FIELD_COLUMNS: &'static str;

    /// `ORDER BY` clause for listings. Always leads with `display_order`.
    const LIST_ORDER: &'static str;
}

/// A content table addressable by a unique, caller-chosen business key.
pub trait KeyedTable: ContentTable {
    const KEY_COLUMN: &'static str;
}

/// Full column list for `T`, lifecycle columns included.
pub fn record_columns<T: ContentTable>() -> String {
    format!(
        "id, {}, is_active, display_order, created_at, updated_at",
        T::FIELD_COLUMNS
    )
}
