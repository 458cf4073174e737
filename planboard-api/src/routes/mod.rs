/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Liveness endpoint
/// - `users`: User create / get
/// - `projects`: Project create / get
/// - `tasks`: Task create / get

pub mod health;
pub mod projects;
pub mod tasks;
pub mod users;
