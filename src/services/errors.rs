use thiserror::Error;

use crate::domain::carousel::EligibilityError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The user is not authorized to perform the operation.
    #[error("unauthorized")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// The write collides with existing state. Carries the user-facing
    /// message.
    #[error("{0}")]
    Conflict(String),
    /// The submitted data failed a business rule. Carries the user-facing
    /// message.
    #[error("{0}")]
    Form(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl From<EligibilityError> for ServiceError {
    fn from(value: EligibilityError) -> Self {
        Self::Form(value.to_string())
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
