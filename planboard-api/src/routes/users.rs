/// User endpoints
///
/// - `POST /api/users` - Create a user
/// - `GET /api/users/:id` - Fetch a user by id

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    schemas::{UserCreate, UserRecord},
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use planboard_shared::{
    auth::password,
    db::repository::{self, Entity},
    models::user::{NewUser, User},
};
use tracing::info;

/// Routes mounted under `/api/users`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
}

/// Create a user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "correct horse battery staple"
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "id": 1,
///   "username": "alice",
///   "email": "alice@example.com",
///   "created_at": "2025-01-01T12:00:00Z",
///   "updated_at": null
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Missing or mistyped field
/// - `500 Internal Server Error`: Server error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserCreate,
    responses(
        (status = 201, description = "Created", body = UserRecord),
        (status = 422, description = "Missing or mistyped field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<UserCreate>,
) -> ApiResult<(StatusCode, Json<UserRecord>)> {
    let password_hash = password::hash_password_blocking(req.password).await?;

    let user: User = repository::create(
        &state.db,
        NewUser {
            username: req.username,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Fetch a user by id
///
/// # Errors
///
/// - `404 Not Found`: `{"detail": "User not found"}`
/// - `422 Unprocessable Entity`: Non-integer id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserRecord),
        (status = 404, description = "No user with this id", body = crate::error::ErrorResponse),
        (status = 422, description = "Id is not an integer", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i64>,
) -> ApiResult<Json<UserRecord>> {
    let user = repository::find_by_id::<User>(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(User::NAME))?;

    Ok(Json(user.into()))
}
