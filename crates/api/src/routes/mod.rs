pub mod auth;
pub mod content_sections;
pub mod festival_stats;
pub mod health;
pub mod media;
pub mod site;
pub mod site_config;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content-sections                     list (public), create (admin)
/// /content-sections/key/{key}           get by key (public)
/// /content-sections/{id}                get (public), update, delete (admin)
///
/// /media                                list ?section= (public), upload (admin)
/// /media/{id}                           get (public), update, delete (admin)
///
/// /festival-stats                       list (public), create (admin)
/// /festival-stats/{id}                  get (public), update, delete (admin)
///
/// /site-config                          list (public), upsert (admin)
/// /site-config/{key}                    get (public), delete (admin)
///
/// /site/{locale}                        localized bundle (public)
/// /image-proxy                          image passthrough ?url= (public)
///
/// /auth/me                              current identity (auth required)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/content-sections", content_sections::router())
        .nest("/media", media::router())
        .nest("/festival-stats", festival_stats::router())
        .nest("/site-config", site_config::router())
        .merge(site::router())
        .nest("/auth", auth::router())
}
