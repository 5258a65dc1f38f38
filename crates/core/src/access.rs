//! Access policy gate.
//!
//! Every operation is either a public read or an admin write. The caller's
//! identity is passed in explicitly so the policy can be exercised without
//! any request machinery.

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;

/// Authenticated caller, as established by a validated bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: DbId,
    pub role: Role,
}

impl Identity {
    pub fn new(user_id: DbId, role: Role) -> Self {
        Self { user_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Access class of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read-only, available without authentication.
    Public,
    /// Mutating; requires an identity with the admin role.
    Admin,
}

/// Check `identity` against the access class of an operation.
///
/// - `Public` always passes and hands back whatever identity was supplied.
/// - `Admin` fails with [`CoreError::Unauthorized`] when no identity is
///   present and with [`CoreError::Forbidden`] when the role is not admin.
pub fn authorize(
    identity: Option<&Identity>,
    access: Access,
) -> Result<Option<&Identity>, CoreError> {
    match access {
        Access::Public => Ok(identity),
        Access::Admin => require_admin(identity).map(Some),
    }
}

fn require_admin(identity: Option<&Identity>) -> Result<&Identity, CoreError> {
    let identity =
        identity.ok_or_else(|| CoreError::Unauthorized("Authentication required".into()))?;
    if !identity.is_admin() {
        return Err(CoreError::Forbidden("Admin access required".into()));
    }
    Ok(identity)
}
