use thiserror::Error;

/// Failures raised by storage adapters.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A query failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The entity cannot be stored in its current shape.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// The store refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Convenient alias for results returned from repositories.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
