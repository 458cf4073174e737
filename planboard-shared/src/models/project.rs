/// Project model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE projects (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL,
///     description TEXT,
///     owner_id INTEGER REFERENCES users (id),
///     created_at TIMESTAMP NOT NULL,
///     updated_at TIMESTAMP
/// );
/// ```

use crate::db::repository::{Entity, RepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteConnection;

/// Stored project row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Project {
    pub id: i64,

    pub name: String,

    pub description: Option<String>,

    /// Owning user. Nothing assigns an owner yet, so this is always None for
    /// rows created through [`NewProject`].
    pub owner_id: Option<i64>,

    pub created_at: DateTime<Utc>,

    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for inserting a new project
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,

    pub description: Option<String>,
}

#[async_trait]
impl Entity for Project {
    type New = NewProject;

    const NAME: &'static str = "Project";
    const TABLE: &'static str = "projects";
    const COLUMNS: &'static str = "id, name, description, owner_id, created_at, updated_at";

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, data: NewProject) -> Result<Self, RepositoryError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (name, description, created_at)
            VALUES (?, ?, ?)
            RETURNING id, name, description, owner_id, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.description)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(project)
    }
}
