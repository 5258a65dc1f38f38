//! Public, read-only routes that serve the rendered site rather than a
//! single table.

use axum::routing::get;
use axum::Router;

use crate::handlers::{image_proxy, site};
use crate::state::AppState;

/// ```text
/// GET /site/{locale}   -> get_site_bundle
/// GET /image-proxy     -> proxy_image (?url=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site/{locale}", get(site::get_site_bundle))
        .route("/image-proxy", get(image_proxy::proxy_image))
}
