/// Task model
///
/// Tasks belong to exactly one project. The insert only writes a row when the
/// project exists, and the foreign key on `project_id` backs that check up at
/// the store level.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     description TEXT,
///     completed BOOLEAN NOT NULL DEFAULT FALSE,
///     project_id INTEGER NOT NULL REFERENCES projects (id),
///     created_at TIMESTAMP NOT NULL,
///     updated_at TIMESTAMP
/// );
/// ```

use crate::db::repository::{Entity, RepositoryError};
use crate::models::project::Project;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteConnection;

/// Stored task row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Task {
    pub id: i64,

    pub title: String,

    pub description: Option<String>,

    /// Always false on insert
    pub completed: bool,

    pub project_id: i64,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for inserting a new task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,

    pub description: Option<String>,

    /// Must reference an existing project
    pub project_id: i64,
}

#[async_trait]
impl Entity for Task {
    type New = NewTask;

    const NAME: &'static str = "Task";
    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static str =
        "id, title, description, completed, project_id, created_at, updated_at";

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, data: NewTask) -> Result<Self, RepositoryError> {
        // Single statement so the write lock is taken up front; no row is
        // produced when the project is missing.
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, completed, project_id, created_at)
            SELECT ?, ?, FALSE, ?, ?
            WHERE EXISTS (SELECT 1 FROM projects WHERE id = ?)
            RETURNING id, title, description, completed, project_id, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.project_id)
        .bind(Utc::now())
        .bind(data.project_id)
        .fetch_optional(conn)
        .await?;

        task.ok_or(RepositoryError::MissingReference {
            entity: Project::NAME,
            id: data.project_id,
        })
    }
}
