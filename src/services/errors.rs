use thiserror::Error;

use crate::domain::types::CategoryId;

/// Errors raised by service layer functions.
///
/// Business-rule violations are never raised; they travel inside a
/// [`UseCaseOutcome`](super::UseCaseOutcome) instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("{kind} with ID {id} was not found")]
    NotFound { kind: &'static str, id: String },
    /// The storage collaborator failed.
    #[error("{0}")]
    Repository(String),
}

impl ServiceError {
    pub fn category_not_found(id: &CategoryId) -> Self {
        Self::NotFound {
            kind: "Category",
            id: id.to_string(),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
