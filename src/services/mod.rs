//! Use cases over the category gateway.

use crate::domain::validation::Notification;

pub mod categories;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};

/// Result of a use case that checks business rules: either the notification
/// listing every violation (or the folded storage failure), or the output.
pub type UseCaseOutcome<T> = Result<T, Notification>;
