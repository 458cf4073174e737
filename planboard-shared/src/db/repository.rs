/// Generic data access over the entity tables
///
/// Every table is described once by an [`Entity`] implementation (table name,
/// column list, and how to insert a row). The free functions in this module
/// provide create and get-by-id for any entity, each wrapped in its own
/// transaction: the unit of work commits on success and rolls back when the
/// transaction is dropped on any error path.
///
/// # Example
///
/// ```no_run
/// use planboard_shared::db::repository;
/// use planboard_shared::models::project::{NewProject, Project};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), repository::RepositoryError> {
/// let project: Project = repository::create(
///     &pool,
///     NewProject {
///         name: "Website relaunch".to_string(),
///         description: None,
///     },
/// )
/// .await?;
///
/// let found = repository::find_by_id::<Project>(&pool, project.id).await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnection, SqlitePool, SqliteRow};
use sqlx::FromRow;
use tracing::debug;

/// Errors produced by the data access layer
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A row referenced by the input does not exist
    #[error("{entity} {id} does not exist")]
    MissingReference {
        /// Name of the referenced entity
        entity: &'static str,

        /// Referenced identifier
        id: i64,
    },

    /// Error reported by the database driver
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// A table-backed record with an integer primary key named `id`
#[async_trait]
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + Sized {
    /// Data needed to insert a new row
    type New: Send;

    /// Display name, e.g. "User"
    const NAME: &'static str;

    /// Backing table
    const TABLE: &'static str;

    /// Comma-separated column list selected for this entity
    const COLUMNS: &'static str;

    /// Primary key of this row
    fn id(&self) -> i64;

    /// Inserts one row on the given connection and returns it as stored
    ///
    /// Implementations generate the timestamps and read back the generated
    /// columns in the same statement.
    async fn insert(conn: &mut SqliteConnection, data: Self::New) -> Result<Self, RepositoryError>;
}

/// Inserts a new entity in its own unit of work
///
/// # Errors
///
/// Returns an error if the insert violates a constraint, a referenced row is
/// missing, or the database is unreachable. Nothing is persisted in that case.
pub async fn create<E: Entity>(pool: &SqlitePool, data: E::New) -> Result<E, RepositoryError> {
    let mut tx = pool.begin().await?;

    let record = E::insert(&mut *tx, data).await?;

    tx.commit().await?;

    debug!(entity = E::NAME, id = record.id(), "Row inserted");
    Ok(record)
}

/// Looks up a single entity by primary key in its own unit of work
///
/// Returns `Ok(None)` when no row has that id.
pub async fn find_by_id<E: Entity>(pool: &SqlitePool, id: i64) -> Result<Option<E>, RepositoryError> {
    let sql = format!("SELECT {} FROM {} WHERE id = ?", E::COLUMNS, E::TABLE);

    let mut tx = pool.begin().await?;

    let record = sqlx::query_as::<_, E>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

    tx.commit().await?;

    debug!(entity = E::NAME, id, found = record.is_some(), "Row lookup");
    Ok(record)
}
