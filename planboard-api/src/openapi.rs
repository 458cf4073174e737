/// OpenAPI document for the HTTP API
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// handlers and the `ToSchema` derives on the transfer schemas. Served as
/// JSON at `GET /openapi.json`.

use crate::{
    error::{ErrorResponse, ValidationErrorDetail},
    routes,
    schemas::{ProjectCreate, ProjectRecord, TaskCreate, TaskRecord, UserCreate, UserRecord},
};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Project Management API", version = "1.0.0"),
    paths(
        routes::users::create_user,
        routes::users::get_user,
        routes::projects::create_project,
        routes::projects::get_project,
        routes::tasks::create_task,
        routes::tasks::get_task,
        routes::health::health_check,
    ),
    components(schemas(
        UserCreate,
        UserRecord,
        ProjectCreate,
        ProjectRecord,
        TaskCreate,
        TaskRecord,
        ErrorResponse,
        ValidationErrorDetail,
        routes::health::HealthResponse,
    )),
    tags(
        (name = "Users", description = "User accounts"),
        (name = "Projects", description = "Projects"),
        (name = "Tasks", description = "Tasks within a project"),
        (name = "Health", description = "Liveness"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
