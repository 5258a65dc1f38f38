//! Handlers for media files.
//!
//! Uploads arrive as base64 JSON. The binary goes to object storage first
//! and the `media_files` row is written only after the store confirms.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use canjala_core::error::CoreError;
use canjala_core::media::{decode_payload, storage_key, validate_file_name, MediaKind};
use canjala_core::types::DbId;
use canjala_db::models::media_file::{CreateMediaFile, MediaFiles, UpdateMediaFile};
use canjala_db::models::record::ContentTable;
use canjala_db::repositories::{MediaFileRepo, RecordRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{PublicRead, RequireAdmin};
use crate::query::MediaListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/media`.
#[derive(Debug, Deserialize)]
pub struct UploadMediaRequest {
    pub file_name: String,
    /// Base64 payload; a `data:<mime>;base64,` prefix is accepted.
    pub data: String,
    pub mime_type: String,
    pub file_type: MediaKind,
    pub section: Option<String>,
    pub caption_pt: Option<String>,
    pub caption_en: Option<String>,
    pub alt_text_pt: Option<String>,
    pub alt_text_en: Option<String>,
    pub display_order: Option<i32>,
}

/// GET /api/v1/media?section=
pub async fn list_media(
    _: PublicRead,
    State(state): State<AppState>,
    Query(params): Query<MediaListParams>,
) -> AppResult<impl IntoResponse> {
    let media = match params.section_filter() {
        Some(section) => MediaFileRepo::list_in_section(&state.pool, section).await?,
        None => RecordRepo::<MediaFiles>::list(&state.pool).await?,
    };
    Ok(Json(DataResponse { data: media }))
}

/// GET /api/v1/media/{id}
pub async fn get_media(
    _: PublicRead,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let media = RecordRepo::<MediaFiles>::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: media }))
}

/// POST /api/v1/media
///
/// Decode, store, then record. A storage failure leaves no row behind
/// (502). If the row insert fails the stored object is deleted again on a
/// best-effort basis.
pub async fn upload_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UploadMediaRequest>,
) -> AppResult<impl IntoResponse> {
    validate_file_name(&input.file_name)?;
    if input.mime_type.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "mime_type must not be empty".into(),
        )));
    }

    let bytes = decode_payload(&input.data)?;
    let file_size = bytes.len() as i64;
    let file_key = storage_key(input.file_type, &input.file_name);

    let url = state
        .object_store
        .put(&file_key, bytes, &input.mime_type)
        .await?;

    let create = CreateMediaFile {
        file_key,
        url,
        file_name: input.file_name,
        file_type: input.file_type,
        mime_type: Some(input.mime_type),
        file_size: Some(file_size),
        caption_pt: input.caption_pt,
        caption_en: input.caption_en,
        alt_text_pt: input.alt_text_pt,
        alt_text_en: input.alt_text_en,
        section: input.section,
        display_order: input.display_order,
        uploaded_by: Some(admin.user_id),
    };

    let media = match MediaFileRepo::create(&state.pool, &create).await {
        Ok(media) => media,
        Err(err) => {
            remove_orphan(&state, &create.file_key).await;
            return Err(err.into());
        }
    };

    tracing::info!(
        media_id = media.id,
        file_key = %media.fields.file_key,
        file_size,
        backend = state.object_store.backend_name(),
        user_id = admin.user_id,
        "Media file uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: media })))
}

/// Delete an object whose metadata row could not be written.
async fn remove_orphan(state: &AppState, file_key: &str) {
    match state.object_store.delete(file_key).await {
        Ok(()) => tracing::warn!(file_key, "Metadata insert failed; stored object removed"),
        Err(e) => tracing::warn!(
            file_key,
            error = %e,
            "Metadata insert failed and stored object could not be removed",
        ),
    }
}

/// PUT /api/v1/media/{id}
///
/// Updates captions, alt text, section and order. The stored object is
/// immutable.
pub async fn update_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMediaFile>,
) -> AppResult<impl IntoResponse> {
    let media = MediaFileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: MediaFiles::ENTITY,
            id,
        }))?;

    tracing::info!(media_id = id, user_id = admin.user_id, "Media file updated");

    Ok(Json(DataResponse { data: media }))
}

/// DELETE /api/v1/media/{id}
///
/// Soft delete only; the stored object is kept.
pub async fn delete_media(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecordRepo::<MediaFiles>::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: MediaFiles::ENTITY,
            id,
        }));
    }

    tracing::info!(media_id = id, user_id = admin.user_id, "Media file deleted");

    Ok(StatusCode::NO_CONTENT)
}
