//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Reads by id or key
//! that find nothing answer `{ "data": null }` rather than 404.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: sections }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
