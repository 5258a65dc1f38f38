use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Media routes mounted at `/media`.
///
/// ```text
/// GET    /        -> list_media (?section=)
/// POST   /        -> upload_media
/// GET    /{id}    -> get_media
/// PUT    /{id}    -> update_media
/// DELETE /{id}    -> delete_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list_media).post(media::upload_media))
        .route(
            "/{id}",
            get(media::get_media)
                .put(media::update_media)
                .delete(media::delete_media),
        )
}
