//! Role-based access control (RBAC) extractors.
//!
//! Each extractor resolves the caller's optional identity and hands it to
//! the access gate in `canjala_core::access`, so the 401/403 decision is
//! made in one place.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use canjala_core::access::{self, Access, Identity};
use canjala_core::error::CoreError;

use super::auth::{bearer_user, AuthUser, MaybeAuthUser};
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 401 without a token and 403 for
/// any other role.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     tracing::info!(user_id = admin.user_id, "admin action");
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Identity);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeAuthUser(user) = MaybeAuthUser::from_request_parts(parts, state).await?;
        let identity = user.as_ref().map(AuthUser::identity);
        // The admin gate only passes with an identity present.
        let admin = access::authorize(identity.as_ref(), Access::Admin)?
            .cloned()
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Authentication required".into()))
            })?;
        Ok(RequireAdmin(admin))
    }
}

/// Marks a read-only route. Never rejects; a token that does not validate
/// reads as anonymous.
///
/// ```ignore
/// async fn list_things(_: PublicRead, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PublicRead(pub Option<Identity>);

impl FromRequestParts<AppState> for PublicRead {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = bearer_user(parts, state)
            .ok()
            .flatten()
            .map(|user| user.identity());
        let passed = access::authorize(identity.as_ref(), Access::Public)?.cloned();
        Ok(PublicRead(passed))
    }
}

/// Requires any authenticated user (any valid role).
///
/// ```ignore
/// async fn any_authed(RequireAuth(user): RequireAuth) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
