/// Integration tests for the generic repository and the entity models

use planboard_shared::auth::password::{hash_password, verify_password};
use planboard_shared::db::migrations::run_migrations;
use planboard_shared::db::pool::{create_pool, DatabaseConfig};
use planboard_shared::db::repository::{self, RepositoryError};
use planboard_shared::models::project::{NewProject, Project};
use planboard_shared::models::task::{NewTask, Task};
use planboard_shared::models::user::{NewUser, User};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn migrated_pool(config: DatabaseConfig) -> SqlitePool {
    let pool = create_pool(config).await.expect("Failed to create pool");
    run_migrations(&pool).await.expect("Migrations failed");
    pool
}

fn new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        description: Some(format!("{} description", name)),
    }
}

#[tokio::test]
async fn test_create_and_find_user() {
    let pool = migrated_pool(DatabaseConfig::in_memory()).await;

    let hash = hash_password("hunter22").unwrap();
    let created: User = repository::create(
        &pool,
        NewUser {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: hash,
        },
    )
    .await
    .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.username, "alice");
    assert_eq!(created.email, "alice@example.com");
    assert!(created.updated_at.is_none());
    assert!(verify_password("hunter22", &created.password_hash).unwrap());

    let found = repository::find_by_id::<User>(&pool, created.id)
        .await
        .unwrap()
        .expect("User should exist");

    assert_eq!(found.id, created.id);
    assert_eq!(found.created_at, created.created_at);
    assert_eq!(found.password_hash, created.password_hash);
}

#[tokio::test]
async fn test_create_project_leaves_owner_unset() {
    let pool = migrated_pool(DatabaseConfig::in_memory()).await;

    let project: Project = repository::create(&pool, new_project("Roadmap")).await.unwrap();

    assert_eq!(project.name, "Roadmap");
    assert_eq!(project.description.as_deref(), Some("Roadmap description"));
    assert!(project.owner_id.is_none());
}

#[tokio::test]
async fn test_create_project_without_description() {
    let pool = migrated_pool(DatabaseConfig::in_memory()).await;

    let project: Project = repository::create(
        &pool,
        NewProject {
            name: "Bare".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let found = repository::find_by_id::<Project>(&pool, project.id)
        .await
        .unwrap()
        .unwrap();
    assert!(found.description.is_none());
}

#[tokio::test]
async fn test_create_task_defaults_to_not_completed() {
    let pool = migrated_pool(DatabaseConfig::in_memory()).await;

    let project: Project = repository::create(&pool, new_project("Home")).await.unwrap();
    let task: Task = repository::create(
        &pool,
        NewTask {
            title: "Paint fence".to_string(),
            description: None,
            project_id: project.id,
        },
    )
    .await
    .unwrap();

    assert!(!task.completed);
    assert_eq!(task.project_id, project.id);

    let found = repository::find_by_id::<Task>(&pool, task.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title, "Paint fence");
    assert_eq!(found.created_at, task.created_at);
}

#[tokio::test]
async fn test_create_task_with_unknown_project_fails_without_insert() {
    let pool = migrated_pool(DatabaseConfig::in_memory()).await;

    let result = repository::create::<Task>(
        &pool,
        NewTask {
            title: "Orphan".to_string(),
            description: None,
            project_id: 4242,
        },
    )
    .await;

    match result {
        Err(RepositoryError::MissingReference { entity, id }) => {
            assert_eq!(entity, "Project");
            assert_eq!(id, 4242);
        }
        other => panic!("Expected MissingReference, got {:?}", other),
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_find_missing_returns_none() {
    let pool = migrated_pool(DatabaseConfig::in_memory()).await;

    assert!(repository::find_by_id::<User>(&pool, 1).await.unwrap().is_none());
    assert!(repository::find_by_id::<Project>(&pool, 1).await.unwrap().is_none());
    assert!(repository::find_by_id::<Task>(&pool, -5).await.unwrap().is_none());
}

#[tokio::test]
async fn test_identical_creates_get_distinct_ids() {
    let pool = migrated_pool(DatabaseConfig::in_memory()).await;

    let first: Project = repository::create(&pool, new_project("Twin")).await.unwrap();
    let second: Project = repository::create(&pool, new_project("Twin")).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_concurrent_creates_on_file_database() {
    let dir = TempDir::new().unwrap();
    let pool = migrated_pool(DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("concurrent.db").display()),
        max_connections: 5,
        ..Default::default()
    })
    .await;

    let project: Project = repository::create(&pool, new_project("Shared")).await.unwrap();

    let mut handles = Vec::new();
    for i in 0..10 {
        let pool = pool.clone();
        let project_id = project.id;
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                let p: Project = repository::create(&pool, new_project(&format!("p{}", i)))
                    .await
                    .unwrap();
                (p.id, format!("p{}", i), p.name)
            } else {
                let t: Task = repository::create(
                    &pool,
                    NewTask {
                        title: format!("t{}", i),
                        description: None,
                        project_id,
                    },
                )
                .await
                .unwrap();
                (t.id, format!("t{}", i), t.title)
            }
        }));
    }

    let results = futures::future::join_all(handles).await;
    for result in results {
        let (id, expected, actual) = result.expect("Task panicked");
        assert!(id > 0);
        assert_eq!(expected, actual);
    }

    let (tasks,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(tasks, 5);
}
