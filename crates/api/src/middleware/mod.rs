//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::MaybeAuthUser`] -- Same, but absence of a token is not an error.
//! - [`rbac::RequireAdmin`] -- Runs the admin access gate.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.
//! - [`rbac::PublicRead`] -- Runs the public access gate on read routes.

pub mod auth;
pub mod rbac;
