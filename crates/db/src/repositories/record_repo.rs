//! Table-agnostic queries over [`Record`] rows.
//!
//! `list` only ever returns active rows. `find_by_id` / `find_by_key`
//! return a row regardless of `is_active` so admin edit views can still
//! address soft-deleted content.

use std::marker::PhantomData;

use canjala_core::types::DbId;
use sqlx::PgPool;

use crate::models::record::{record_columns, ContentTable, KeyedTable, Record};

/// Generic repository for any [`ContentTable`].
///
/// ```ignore
/// let sections = RecordRepo::<ContentSections>::list(&pool).await?;
/// ```
pub struct RecordRepo<T>(PhantomData<T>);

impl<T: ContentTable> RecordRepo<T> {
    /// List active rows in presentation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Record<T::Fields>>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE is_active = true ORDER BY {}",
            record_columns::<T>(),
            T::TABLE,
            T::LIST_ORDER
        );
        sqlx::query_as::<_, Record<T::Fields>>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a row by its internal ID, active or not.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Record<T::Fields>>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1",
            record_columns::<T>(),
            T::TABLE
        );
        sqlx::query_as::<_, Record<T::Fields>>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a row (set `is_active = false`). Never removes data.
    ///
    /// Returns `false` if no row with the given `id` exists. Deleting an
    /// already-inactive row succeeds and refreshes `updated_at`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("UPDATE {} SET is_active = false WHERE id = $1", T::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

impl<T: KeyedTable> RecordRepo<T> {
    /// Find a row by its business key, active or not.
    pub async fn find_by_key(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<Record<T::Fields>>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE {} = $1",
            record_columns::<T>(),
            T::TABLE,
            T::KEY_COLUMN
        );
        sqlx::query_as::<_, Record<T::Fields>>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a row by business key.
    ///
    /// Returns `false` if the key does not exist.
    pub async fn soft_delete_by_key(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let query = format!(
            "UPDATE {} SET is_active = false WHERE {} = $1",
            T::TABLE,
            T::KEY_COLUMN
        );
        let result = sqlx::query(&query).bind(key).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
