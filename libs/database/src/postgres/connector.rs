use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use super::PostgresConfig;
use crate::retry::{RetryConfig, retry_with_backoff};
use crate::{DatabaseError, DatabaseResult};

/// Open a connection pool with the configured settings.
pub async fn connect(config: PostgresConfig) -> DatabaseResult<DatabaseConnection> {
    let db = Database::connect(config.into_connect_options())
        .await
        .map_err(DatabaseError::Connect)?;

    info!("Connected to PostgreSQL");
    Ok(db)
}

/// [`connect`] with exponential backoff, for startups that race the database.
pub async fn connect_with_retry(
    config: PostgresConfig,
    retry: RetryConfig,
) -> DatabaseResult<DatabaseConnection> {
    retry_with_backoff(|| connect(config.clone()), retry).await
}

/// Apply every pending migration of `M`.
///
/// ```ignore
/// run_migrations::<migration::Migrator>(&db, "petshop_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!(app = app_name, "Applying pending migrations");

    M::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration {
            app: app_name.to_owned(),
            source,
        })?;

    info!(app = app_name, "Schema is up to date");
    Ok(())
}

/// Close the pool during shutdown, logging the outcome.
pub async fn close(db: DatabaseConnection, app_name: &str) {
    match db.close().await {
        Ok(()) => info!(app = app_name, "PostgreSQL pool closed"),
        Err(e) => error!(app = app_name, error = %e, "Failed to close PostgreSQL pool"),
    }
}
