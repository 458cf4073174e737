/// Task endpoints
///
/// - `POST /api/tasks` - Create a task in an existing project
/// - `GET /api/tasks/:id` - Fetch a task by id

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    schemas::{TaskCreate, TaskRecord},
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use planboard_shared::{
    db::repository::{self, Entity},
    models::task::Task,
};
use tracing::info;

/// Routes mounted under `/api/tasks`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_task))
        .route("/:id", get(get_task))
}

/// Create a task
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks
/// Content-Type: application/json
///
/// { "title": "Draft copy", "description": null, "project_id": 1 }
/// ```
///
/// # Response
///
/// `201 Created` with the task record; `completed` is always `false`.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Missing/mistyped field, or `project_id`
///   does not name an existing project (nothing is inserted)
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = "Tasks",
    request_body = TaskCreate,
    responses(
        (status = 201, description = "Created", body = TaskRecord),
        (status = 422, description = "Missing or mistyped field, or unknown project", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_task(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TaskCreate>,
) -> ApiResult<(StatusCode, Json<TaskRecord>)> {
    let task = repository::create::<Task>(&state.db, req.into()).await?;

    info!(task_id = task.id, project_id = task.project_id, "Task created");

    Ok((StatusCode::CREATED, Json(task.into())))
}

/// Fetch a task by id
#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = "Tasks",
    params(("id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task found", body = TaskRecord),
        (status = 404, description = "No task with this id", body = crate::error::ErrorResponse),
        (status = 422, description = "Id is not an integer", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_task(
    State(state): State<AppState>,
    ApiPath(task_id): ApiPath<i64>,
) -> ApiResult<Json<TaskRecord>> {
    let task = repository::find_by_id::<Task>(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found(Task::NAME))?;

    Ok(Json(task.into()))
}
