use axum::routing::get;
use axum::Router;

use crate::handlers::festival_stats;
use crate::state::AppState;

/// Festival stat routes mounted at `/festival-stats`.
///
/// ```text
/// GET    /        -> list_stats
/// POST   /        -> create_stat
/// GET    /{id}    -> get_stat
/// PUT    /{id}    -> update_stat
/// DELETE /{id}    -> delete_stat
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(festival_stats::list_stats).post(festival_stats::create_stat),
        )
        .route(
            "/{id}",
            get(festival_stats::get_stat)
                .put(festival_stats::update_stat)
                .delete(festival_stats::delete_stat),
        )
}
