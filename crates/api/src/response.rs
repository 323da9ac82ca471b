//! Shared response envelope for API handlers.
//!
//! Every success body is `{ "data": ... }`. Use [`DataResponse`] instead of an
//! ad-hoc `serde_json::json!` so the shape is checked at compile time.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: badges }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
