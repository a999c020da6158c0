use diesel::result::DatabaseErrorKind;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A write collided with a uniqueness constraint, e.g. featuring an
    /// already-featured product.
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    DatabaseError(diesel::result::Error),
    /// The connection pool could not hand out a connection.
    #[error("connection pool error: {0}")]
    PoolError(#[from] diesel::r2d2::PoolError),
    /// A stored row no longer satisfies a domain constraint.
    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_string())
            }
            other => Self::DatabaseError(other),
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(err: TypeConstraintError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
