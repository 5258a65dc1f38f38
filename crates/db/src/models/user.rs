//! User entity model and DTOs.
//!
//! Users are provisioned from the external OAuth provider; the CMS only
//! reads them back and references them from `media_files.uploaded_by`.

use canjala_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    /// `user` or `admin`.
    pub role: String,
    pub last_signed_in: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub open_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub role: Option<String>,
}
