//! Server-side image passthrough, so the public site can embed remote
//! images without tripping CORS or mixed-content rules.

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use canjala_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::PublicRead;
use crate::query::ImageProxyParams;
use crate::state::AppState;

/// Content type assumed when the upstream does not send one.
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// One day.
const CACHE_CONTROL: &str = "public, max-age=86400";

/// GET /api/v1/image-proxy?url=
///
/// Only absolute `http`/`https` URLs are fetched. The upstream body is
/// streamed back unchanged.
///
/// Hosts are not filtered: loopback, private and link-local addresses are
/// fetched like any other, so outbound restrictions belong to the network
/// the server runs in.
pub async fn proxy_image(
    _: PublicRead,
    State(state): State<AppState>,
    Query(params): Query<ImageProxyParams>,
) -> AppResult<Response> {
    let raw = params
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation("url query parameter is required".into()))
        })?;

    let target = reqwest::Url::parse(&raw)
        .map_err(|_| AppError::Core(CoreError::Validation(format!("Invalid url '{raw}'"))))?;
    if !matches!(target.scheme(), "http" | "https") {
        return Err(AppError::Core(CoreError::Validation(
            "Only http and https URLs can be proxied".into(),
        )));
    }

    let upstream = state.http.get(target).send().await.map_err(|e| {
        tracing::warn!(url = %raw, error = %e, "Image proxy fetch failed");
        AppError::Core(CoreError::Upstream("Failed to fetch image".into()))
    })?;

    let status = upstream.status();
    if !status.is_success() {
        tracing::warn!(url = %raw, %status, "Image proxy upstream returned an error");
        return Err(AppError::Core(CoreError::Upstream(format!(
            "Upstream responded with {status}"
        ))));
    }

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, CACHE_CONTROL.to_string()),
        ],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}
