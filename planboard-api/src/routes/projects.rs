/// Project endpoints
///
/// - `POST /api/projects` - Create a project
/// - `GET /api/projects/:id` - Fetch a project by id
///
/// Projects are created without an owner; `owner_id` is returned as `null`.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    schemas::{ProjectCreate, ProjectRecord},
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use planboard_shared::{
    db::repository::{self, Entity},
    models::project::Project,
};
use tracing::info;

/// Routes mounted under `/api/projects`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_project))
        .route("/:id", get(get_project))
}

/// Create a project
///
/// # Endpoint
///
/// ```text
/// POST /api/projects
/// Content-Type: application/json
///
/// { "name": "Website relaunch", "description": "Q3 marketing site" }
/// ```
///
/// # Response
///
/// `201 Created` with the project record.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = ProjectCreate,
    responses(
        (status = 201, description = "Created", body = ProjectRecord),
        (status = 422, description = "Missing or mistyped field", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProjectCreate>,
) -> ApiResult<(StatusCode, Json<ProjectRecord>)> {
    let project = repository::create::<Project>(&state.db, req.into()).await?;

    info!(project_id = project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// Fetch a project by id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Projects",
    params(("id" = i64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project found", body = ProjectRecord),
        (status = 404, description = "No project with this id", body = crate::error::ErrorResponse),
        (status = 422, description = "Id is not an integer", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
) -> ApiResult<Json<ProjectRecord>> {
    let project = repository::find_by_id::<Project>(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(Project::NAME))?;

    Ok(Json(project.into()))
}
