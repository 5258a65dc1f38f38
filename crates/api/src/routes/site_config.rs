use axum::routing::get;
use axum::Router;

use crate::handlers::site_config;
use crate::state::AppState;

/// Site configuration routes mounted at `/site-config`.
///
/// ```text
/// GET    /         -> list_configs
/// PUT    /         -> upsert_config
/// GET    /{key}    -> get_config
/// DELETE /{key}    -> delete_config
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(site_config::list_configs).put(site_config::upsert_config),
        )
        .route(
            "/{key}",
            get(site_config::get_config).delete(site_config::delete_config),
        )
}
