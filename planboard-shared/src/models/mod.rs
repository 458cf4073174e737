/// Database models
///
/// One module per table. Each model is the stored row shape plus the input
/// needed to insert it, and implements [`crate::db::repository::Entity`].
///
/// - `user`: user accounts
/// - `project`: projects, optionally owned by a user
/// - `task`: tasks belonging to a project

pub mod project;
pub mod task;
pub mod user;
