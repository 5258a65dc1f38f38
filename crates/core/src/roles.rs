//! Well-known role names.
//!
//! These must match the `CHECK` constraint on `users.role` in
//! `20260301000001_create_users_table.sql`.

use std::fmt;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Role carried by an authenticated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse a role claim. Unknown role names map to [`Role::User`] so a
    /// malformed claim can never grant admin access.
    pub fn from_claim(name: &str) -> Self {
        match name {
            ROLE_ADMIN => Self::Admin,
            _ => Self::User,
        }
    }

    /// Database / claim name value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => ROLE_USER,
            Self::Admin => ROLE_ADMIN,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
