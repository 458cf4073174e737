//! # Planboard Shared Library
//!
//! Store layer for the Planboard API: connection pool, migrations, the
//! generic repository, entity models, and password hashing.
//!
//! ## Module Organization
//!
//! - `db`: pool, migrations, repository
//! - `models`: users, projects, tasks
//! - `auth`: password hashing

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Planboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
