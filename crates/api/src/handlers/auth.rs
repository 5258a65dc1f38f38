//! Session introspection for the admin client.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use canjala_core::types::DbId;
use canjala_db::models::user::User;
use canjala_db::repositories::UserRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// The caller as seen by the API.
#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub user_id: DbId,
    pub role: &'static str,
    pub is_admin: bool,
    /// Stored profile, when the identity provider has synced one.
    pub user: Option<User>,
}

/// GET /api/v1/auth/me
pub async fn me(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id).await?;

    Ok(Json(DataResponse {
        data: CurrentUser {
            user_id: auth.user_id,
            role: auth.role.as_str(),
            is_admin: auth.identity().is_admin(),
            user,
        },
    }))
}
