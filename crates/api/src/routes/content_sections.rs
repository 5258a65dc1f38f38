use axum::routing::get;
use axum::Router;

use crate::handlers::content_sections;
use crate::state::AppState;

/// Content section routes mounted at `/content-sections`.
///
/// ```text
/// GET    /            -> list_sections
/// POST   /            -> create_section
/// GET    /key/{key}   -> get_section_by_key
/// GET    /{id}        -> get_section
/// PUT    /{id}        -> update_section
/// DELETE /{id}        -> delete_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(content_sections::list_sections).post(content_sections::create_section),
        )
        .route("/key/{key}", get(content_sections::get_section_by_key))
        .route(
            "/{id}",
            get(content_sections::get_section)
                .put(content_sections::update_section)
                .delete(content_sections::delete_section),
        )
}
