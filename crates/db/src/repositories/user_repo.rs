//! Repository for the `users` table.

use canjala_core::roles::ROLE_USER;
use canjala_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, open_id, name, email, login_method, role, \
    last_signed_in, created_at, updated_at";

/// Provides lookups and provisioning for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row. Role defaults to
    /// `user`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (open_id, name, email, login_method, role) \
             VALUES ($1, $2, $3, $4, COALESCE($5, '{ROLE_USER}')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.open_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.login_method)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
