//! Handlers for site configuration entries, addressed by `config_key`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use canjala_core::content::validate_business_key;
use canjala_core::error::CoreError;
use canjala_db::models::record::ContentTable;
use canjala_db::models::site_config::{SiteConfigs, UpsertSiteConfig};
use canjala_db::repositories::{RecordRepo, SiteConfigRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{PublicRead, RequireAdmin};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/site-config
pub async fn list_configs(
    _: PublicRead,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let configs = RecordRepo::<SiteConfigs>::list(&state.pool).await?;
    Ok(Json(DataResponse { data: configs }))
}

/// GET /api/v1/site-config/{key}
///
/// Answers `data: null` when the key is unknown.
pub async fn get_config(
    _: PublicRead,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let config = RecordRepo::<SiteConfigs>::find_by_key(&state.pool, &key).await?;
    Ok(Json(DataResponse { data: config }))
}

/// PUT /api/v1/site-config
///
/// Insert or update by `config_key`. Reactivates a soft-deleted entry.
pub async fn upsert_config(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpsertSiteConfig>,
) -> AppResult<impl IntoResponse> {
    validate_business_key("config_key", &input.config_key)?;

    let config = SiteConfigRepo::upsert(&state.pool, &input).await?;

    tracing::info!(
        config_id = config.id,
        config_key = %config.fields.config_key,
        user_id = admin.user_id,
        "Site config upserted",
    );

    Ok(Json(DataResponse { data: config }))
}

/// DELETE /api/v1/site-config/{key}
pub async fn delete_config(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecordRepo::<SiteConfigs>::soft_delete_by_key(&state.pool, &key).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::KeyNotFound {
            entity: SiteConfigs::ENTITY,
            key,
        }));
    }

    tracing::info!(config_key = %key, user_id = admin.user_id, "Site config deleted");

    Ok(StatusCode::NO_CONTENT)
}
