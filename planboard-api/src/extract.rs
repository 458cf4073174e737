/// Request extractors with uniform error bodies
///
/// Axum's stock `Json` and `Path` extractors reject bad input with plain-text
/// bodies and a mix of 400/415/422 statuses. These wrappers run the same
/// extraction but turn every rejection into [`ApiError::ValidationError`], so
/// clients always get a 422 with a JSON `detail` before the handler runs.
///
/// # Example
///
/// ```no_run
/// use axum::Json;
/// use planboard_api::error::ApiResult;
/// use planboard_api::extract::{ApiJson, ApiPath};
///
/// #[derive(serde::Deserialize, serde::Serialize)]
/// struct Rename {
///     name: String,
/// }
///
/// async fn handler(ApiPath(id): ApiPath<i64>, ApiJson(body): ApiJson<Rename>) -> ApiResult<Json<Rename>> {
///     println!("renaming {}", id);
///     Ok(Json(body))
/// }
/// ```

use crate::error::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body; rejections become 422 validation errors
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters; rejections become 422 validation errors
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
