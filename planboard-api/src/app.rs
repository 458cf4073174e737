/// Application state and router builder
///
/// This module defines the shared application state and assembles the Axum
/// router with all routes, the frontend fallback and middleware.
///
/// # Example
///
/// ```no_run
/// use planboard_api::{app::{build_router, AppState}, config::Config};
/// use planboard_shared::db::pool::create_pool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(config.pool_config()).await?;
/// let state = AppState::new(pool, config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, error::ApiError, openapi, routes};
use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use std::{path::Path, sync::Arc};
use tower::ServiceExt;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The pool is itself a cheap handle, and config sits behind an Arc.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                  # Liveness (no database access)
/// ├── /openapi.json            # OpenAPI document for the API routes
/// ├── /api/                    # JSON API; unknown paths → JSON 404
/// │   ├── POST /users          GET /users/:id
/// │   ├── POST /projects       GET /projects/:id
/// │   └── POST /tasks          GET /tasks/:id
/// ├── /static/*                # Files from the static dir (if present)
/// └── /*                       # Static file, else index.html (if present);
///                              # never for paths starting with "api"
/// ```
///
/// # Middleware Stack
///
/// 1. JSON body for 405 responses
/// 2. Logging (tower-http TraceLayer)
/// 3. CORS (tower-http CorsLayer): request origin echoed with credentials,
///    GET/POST/PUT/PATCH/DELETE, `Content-Type` and `Authorization` headers
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/users", routes::users::router())
        .nest("/projects", routes::projects::router())
        .nest("/tasks", routes::tasks::router())
        .fallback(not_found);

    let router = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/openapi.json", get(openapi::openapi_json))
        .nest("/api", api_routes);

    let router = mount_frontend(router, &state.config.api.static_dir);

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    router
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}

/// Serves the single-page frontend, if its directory exists
///
/// Unmatched paths resolve to a file under `static_dir`, falling back to
/// `index.html` so the client-side router can take over. Paths starting with
/// `api` (`/api/`, `/apifoo`) get the JSON 404 instead of the document.
fn mount_frontend(router: Router<AppState>, static_dir: &Path) -> Router<AppState> {
    if !static_dir.is_dir() {
        warn!(
            static_dir = %static_dir.display(),
            "Static directory not found; frontend assets will not be served"
        );
        return router.fallback(not_found);
    }

    info!(static_dir = %static_dir.display(), "Serving frontend assets");

    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    router
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(move |request: Request| serve_frontend(spa.clone(), request))
}

async fn serve_frontend(spa: ServeDir<ServeFile>, request: Request) -> Response {
    if is_api_path(request.uri().path()) {
        return not_found().await.into_response();
    }

    match spa.oneshot(request).await {
        Ok(response) => response.into_response(),
        Err(never) => match never {},
    }
}

/// True for every path the frontend must not answer
fn is_api_path(path: &str) -> bool {
    path.trim_start_matches('/').starts_with("api")
}

/// Gives the router's bodiless 405s the uniform JSON error body
async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut json = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        json.headers_mut().insert(header::ALLOW, allow);
    }
    json
}

/// JSON 404 for unmatched routes
async fn not_found() -> ApiError {
    ApiError::NotFound("Not found".to_string())
}
