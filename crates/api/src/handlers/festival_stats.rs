//! Handlers for festival statistics (one timeline entry per edition).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use canjala_core::content::{validate_participants, validate_year_label};
use canjala_core::error::CoreError;
use canjala_core::types::DbId;
use canjala_db::models::festival_stat::{CreateFestivalStat, FestivalStats, UpdateFestivalStat};
use canjala_db::models::record::ContentTable;
use canjala_db::repositories::{FestivalStatRepo, RecordRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{PublicRead, RequireAdmin};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/festival-stats
pub async fn list_stats(
    _: PublicRead,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = RecordRepo::<FestivalStats>::list(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// GET /api/v1/festival-stats/{id}
pub async fn get_stat(
    _: PublicRead,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stat = RecordRepo::<FestivalStats>::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: stat }))
}

/// POST /api/v1/festival-stats
pub async fn create_stat(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateFestivalStat>,
) -> AppResult<impl IntoResponse> {
    validate_year_label(&input.year)?;
    validate_participants(input.participants)?;

    let stat = FestivalStatRepo::create(&state.pool, &input).await?;

    tracing::info!(
        stat_id = stat.id,
        year = %stat.fields.year,
        user_id = admin.user_id,
        "Festival stat created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: stat })))
}

/// PUT /api/v1/festival-stats/{id}
pub async fn update_stat(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFestivalStat>,
) -> AppResult<impl IntoResponse> {
    if let Some(year) = &input.year {
        validate_year_label(year)?;
    }
    validate_participants(input.participants)?;

    let stat = FestivalStatRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: FestivalStats::ENTITY,
            id,
        }))?;

    tracing::info!(stat_id = id, user_id = admin.user_id, "Festival stat updated");

    Ok(Json(DataResponse { data: stat }))
}

/// DELETE /api/v1/festival-stats/{id}
pub async fn delete_stat(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RecordRepo::<FestivalStats>::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: FestivalStats::ENTITY,
            id,
        }));
    }

    tracing::info!(stat_id = id, user_id = admin.user_id, "Festival stat deleted");

    Ok(StatusCode::NO_CONTENT)
}
