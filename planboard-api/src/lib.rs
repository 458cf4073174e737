//! # Planboard API Server Library
//!
//! HTTP layer of the Planboard API: users, projects and tasks over JSON.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Extractors that reject bad input with JSON 422s
//! - `openapi`: OpenAPI document served at `/openapi.json`
//! - `routes`: API route handlers
//! - `schemas`: Request and response shapes

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod openapi;
pub mod routes;
pub mod schemas;
