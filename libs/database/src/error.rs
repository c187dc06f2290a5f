use sea_orm::DbErr;

/// Startup and readiness failures of the PostgreSQL layer.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("could not connect to PostgreSQL: {0}")]
    Connect(#[source] DbErr),

    #[error("migrations for {app} failed: {source}")]
    Migration { app: String, source: DbErr },

    #[error("PostgreSQL is unreachable: {0}")]
    Unreachable(#[source] DbErr),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;
