/// Transfer schemas
///
/// Shapes of the data crossing the HTTP boundary, kept separate from the
/// stored rows in `planboard_shared::models`. Create-schemas are what clients
/// send; record schemas are what the API returns. Rows are mapped to records
/// explicitly, so a column rename in the store never silently changes the
/// wire format and secrets such as the password hash never reach a response.

use chrono::{DateTime, Utc};
use planboard_shared::models::{
    project::{NewProject, Project},
    task::{NewTask, Task},
    user::User,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `POST /api/users` body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    /// Plaintext; hashed before it reaches the store
    pub password: String,
}

/// User as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// `POST /api/projects` body
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProjectCreate {
    pub name: String,
    pub description: Option<String>,
}

impl From<ProjectCreate> for NewProject {
    fn from(req: ProjectCreate) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Project as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Serialized as `null` while no owner is assigned
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            owner_id: project.owner_id,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// `POST /api/tasks` body
///
/// `completed` is not accepted; new tasks always start open.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TaskCreate {
    pub title: String,
    pub description: Option<String>,
    pub project_id: i64,
}

impl From<TaskCreate> for NewTask {
    fn from(req: TaskCreate) -> Self {
        Self {
            title: req.title,
            description: req.description,
            project_id: req.project_id,
        }
    }
}

/// Task as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub project_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskRecord {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            completed: task.completed,
            project_id: task.project_id,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_record_omits_password_hash() {
        let record = UserRecord::from(User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        });

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("password_hash").is_none());
        assert!(value.get("password").is_none());
        assert_eq!(value["updated_at"], serde_json::Value::Null);
    }

    #[test]
    fn test_project_create_description_is_optional() {
        let req: ProjectCreate = serde_json::from_value(json!({ "name": "Roadmap" })).unwrap();
        assert!(req.description.is_none());
    }

    #[test]
    fn test_task_create_ignores_completed() {
        let req: TaskCreate = serde_json::from_value(json!({
            "title": "Ship it",
            "project_id": 3,
            "completed": true
        }))
        .unwrap();

        let new_task = NewTask::from(req);
        assert_eq!(new_task.project_id, 3);
    }

    #[test]
    fn test_task_create_rejects_string_project_id() {
        let result: Result<TaskCreate, _> = serde_json::from_value(json!({
            "title": "Ship it",
            "project_id": "three"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_project_record_serializes_null_owner() {
        let record = ProjectRecord::from(Project {
            id: 9,
            name: "Roadmap".to_string(),
            description: None,
            owner_id: None,
            created_at: Utc::now(),
            updated_at: None,
        });

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["owner_id"], serde_json::Value::Null);
        assert_eq!(value["id"], 9);
    }
}
