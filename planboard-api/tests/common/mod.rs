//! Common test utilities for integration tests
//!
//! This module provides shared infrastructure for integration tests:
//! - In-memory database with migrations applied
//! - Router built the same way `main` builds it
//! - Request helpers that drive the router without a socket

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use planboard_api::app::{build_router, AppState};
use planboard_api::config::Config;
use planboard_shared::db::migrations::run_migrations;
use planboard_shared::db::pool::{create_pool, DatabaseConfig};
use serde_json::Value;
use sqlx::SqlitePool;
use std::path::Path;
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
    pub config: Config,
}

impl TestContext {
    /// Creates a context with a fresh in-memory database and no frontend
    pub async fn new() -> anyhow::Result<Self> {
        Self::with_static_dir(Path::new("./does-not-exist-static")).await
    }

    /// Creates a context serving the frontend from `static_dir`
    pub async fn with_static_dir(static_dir: &Path) -> anyhow::Result<Self> {
        let mut config = Config::default();
        config.database.url = DatabaseConfig::in_memory().url;
        config.database.max_connections = 1;
        config.api.static_dir = static_dir.to_path_buf();

        let db = create_pool(config.pool_config()).await?;
        run_migrations(&db).await?;

        let app = build_router(AppState::new(db.clone(), config.clone()));

        Ok(Self { db, app, config })
    }

    /// Sends a request through the router
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.app.clone().call(request).await.unwrap()
    }

    /// `GET` a path
    pub async fn get(&self, uri: &str) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// `POST` a JSON body
    pub async fn post_json(&self, uri: &str, body: Value) -> Response<Body> {
        self.post_raw(uri, body.to_string()).await
    }

    /// `POST` a raw body labelled as JSON
    pub async fn post_raw(&self, uri: &str, body: impl Into<String>) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.into()))
            .unwrap();
        self.send(request).await
    }

    /// Creates a project and returns its id
    pub async fn create_project(&self, name: &str) -> i64 {
        let response = self
            .post_json(
                "/api/projects",
                serde_json::json!({ "name": name, "description": null }),
            )
            .await;
        let (status, body) = json_body(response).await;
        assert_eq!(status, StatusCode::CREATED, "project create failed: {}", body);
        body["id"].as_i64().unwrap()
    }

    /// Number of rows in a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.db)
            .await
            .unwrap()
    }
}

/// Reads a response into its status and JSON body
pub async fn json_body(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        panic!(
            "Expected JSON body for {}, got {:?}",
            status,
            String::from_utf8_lossy(&bytes)
        )
    });
    (status, body)
}

/// Reads a response into its status and text body
pub async fn text_body(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
