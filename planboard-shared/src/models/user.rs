/// User model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     username TEXT NOT NULL,
///     email TEXT NOT NULL,
///     password_hash TEXT NOT NULL,
///     created_at TIMESTAMP NOT NULL,
///     updated_at TIMESTAMP
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use planboard_shared::auth::password::hash_password;
/// use planboard_shared::db::repository;
/// use planboard_shared::models::user::{NewUser, User};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
/// let user: User = repository::create(
///     &pool,
///     NewUser {
///         username: "alice".to_string(),
///         email: "alice@example.com".to_string(),
///         password_hash: hash_password("correct horse battery staple")?,
///     },
/// )
/// .await?;
/// println!("Created user: {}", user.id);
/// # Ok(())
/// # }
/// ```

use crate::db::repository::{Entity, RepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteConnection;

/// Stored user row
///
/// Passwords are stored as Argon2id hashes, never in plaintext. The hash
/// stays inside the store layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, never reused
    pub id: i64,

    pub username: String,

    pub email: String,

    /// Argon2id PHC string
    pub password_hash: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last updated (None until an update path exists)
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for inserting a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,

    pub email: String,

    /// Argon2id hash (NOT the plaintext password!)
    pub password_hash: String,
}

#[async_trait]
impl Entity for User {
    type New = NewUser;

    const NAME: &'static str = "User";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, username, email, password_hash, created_at, updated_at";

    fn id(&self) -> i64 {
        self.id
    }

    async fn insert(conn: &mut SqliteConnection, data: NewUser) -> Result<Self, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.password_hash)
        .bind(Utc::now())
        .fetch_one(conn)
        .await?;

        Ok(user)
    }
}
