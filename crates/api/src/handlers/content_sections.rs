//! Handlers for bilingual content sections.
//!
//! Reads are public; every mutation goes through [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use canjala_core::content::validate_business_key;
use canjala_core::error::CoreError;
use canjala_core::types::DbId;
use canjala_db::models::content_section::{
    ContentSections, CreateContentSection, UpdateContentSection,
};
use canjala_db::models::record::ContentTable;
use canjala_db::repositories::{ContentSectionRepo, RecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{PublicRead, RequireAdmin};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/content-sections
pub async fn list_sections(
    _: PublicRead,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let sections = RecordRepo::<ContentSections>::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// GET /api/v1/content-sections/key/{key}
///
/// Answers `data: null` when no section has this key.
pub async fn get_section_by_key(
    _: PublicRead,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let section = RecordRepo::<ContentSections>::find_by_key(&state.pool, &key).await?;
    Ok(Json(DataResponse { data: section }))
}

/// GET /api/v1/content-sections/{id}
pub async fn get_section(
    _: PublicRead,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let section = RecordRepo::<ContentSections>::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: section }))
}

/// POST /api/v1/content-sections
pub async fn create_section(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateContentSection>,
) -> AppResult<impl IntoResponse> {
    validate_business_key("section_key", &input.section_key)?;

    let section = ContentSectionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        section_id = section.id,
        section_key = %section.fields.section_key,
        user_id = admin.user_id,
        "Content section created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: section })))
}

/// PUT /api/v1/content-sections/{id}
///
/// Partial update; omitted fields keep their stored value.
pub async fn update_section(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContentSection>,
) -> AppResult<impl IntoResponse> {
    let section = ContentSectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: ContentSections::ENTITY,
            id,
        }))?;

    tracing::info!(section_id = id, user_id = admin.user_id, "Content section updated");

    Ok(Json(DataResponse { data: section }))
}

/// DELETE /api/v1/content-sections/{id}
///
/// Soft delete. The key stays reserved.
pub async fn delete_section(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecordRepo::<ContentSections>::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ContentSections::ENTITY,
            id,
        }));
    }

    tracing::info!(section_id = id, user_id = admin.user_id, "Content section deleted");

    Ok(StatusCode::NO_CONTENT)
}
