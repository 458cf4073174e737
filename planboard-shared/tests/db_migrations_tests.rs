/// Integration tests for database migrations
///
/// Migrations run against real SQLite files so that reopening a database
/// exercises the "already applied" path.

use planboard_shared::db::migrations::{get_migration_status, run_migrations};
use planboard_shared::db::pool::{close_pool, create_pool, DatabaseConfig};
use tempfile::TempDir;

fn file_config(dir: &TempDir) -> DatabaseConfig {
    DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("migrations.db").display()),
        ..Default::default()
    }
}

async fn table_names(pool: &sqlx::SqlitePool) -> Vec<String> {
    sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .expect("Failed to list tables")
}

#[tokio::test]
async fn test_run_migrations_creates_tables() {
    let dir = TempDir::new().unwrap();
    let pool = create_pool(file_config(&dir)).await.expect("Failed to create pool");

    run_migrations(&pool).await.expect("Migrations failed");

    let tables = table_names(&pool).await;
    for expected in ["projects", "tasks", "users"] {
        assert!(
            tables.iter().any(|t| t == expected),
            "Table {} should exist, found {:?}",
            expected,
            tables
        );
    }

    close_pool(pool).await;
}

#[tokio::test]
async fn test_migrations_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let pool = create_pool(file_config(&dir)).await.expect("Failed to create pool");
    run_migrations(&pool).await.expect("First migration run failed");
    sqlx::query("INSERT INTO projects (name, created_at) VALUES ('kept', '2025-01-01T00:00:00+00:00')")
        .execute(&pool)
        .await
        .unwrap();
    close_pool(pool).await;

    let pool = create_pool(file_config(&dir)).await.expect("Failed to reopen pool");
    run_migrations(&pool).await.expect("Second migration run failed");

    let status = get_migration_status(&pool).await.unwrap();
    assert!(status.is_up_to_date);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "Re-running migrations must not touch existing rows");

    close_pool(pool).await;
}

#[tokio::test]
async fn test_task_project_foreign_key_enforced() {
    let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();

    let result = sqlx::query(
        "INSERT INTO tasks (title, project_id, created_at) VALUES ('orphan', 999, '2025-01-01T00:00:00+00:00')",
    )
    .execute(&pool)
    .await;

    let err = result.expect_err("Insert with unknown project must fail");
    let db_err = err.as_database_error().expect("Expected a database error");
    assert_eq!(db_err.kind(), sqlx::error::ErrorKind::ForeignKeyViolation);

    close_pool(pool).await;
}
