//! Validation handlers used by aggregates to report rule violations.
//!
//! Aggregates never decide how violations are surfaced: they report every
//! broken rule to a [`ValidationHandler`]. The [`Notification`] handler
//! collects all of them, while [`ThrowsValidationHandler`] stops at the first
//! one by returning an error the caller propagates with `?`.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Boxed failure returned by ad-hoc checks passed to
/// [`ValidationHandler::validate`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A single human-readable validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validation failures raised out of a fail-fast check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    errors: Vec<ValidationError>,
}

impl DomainError {
    /// Raise a single error; its message becomes the error message.
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            message: error.message.clone(),
            errors: vec![error],
        }
    }

    /// Raise a list of errors at once. The error message is left empty.
    pub fn with_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            message: String::new(),
            errors,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

/// Sink for validation failures.
///
/// Methods that may stop validation return `Err`; rule sets forward it with
/// `?` so that a fail-fast handler short-circuits while an accumulating one
/// lets every rule run.
pub trait ValidationHandler {
    /// Report one error.
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Report every error collected by another handler.
    fn append_handler(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError>;

    /// Run an ad-hoc check and report its failure, if any.
    fn validate<F>(&mut self, validation: F) -> Result<(), DomainError>
    where
        Self: Sized,
        F: FnOnce() -> Result<(), BoxError>;

    /// Errors collected so far, in insertion order.
    fn errors(&self) -> &[ValidationError];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Accumulating handler: never fails, keeps every reported error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an unexpected failure (e.g. from storage) as a single error,
    /// keeping its message verbatim.
    pub fn from_failure(failure: &dyn StdError) -> Self {
        Self::from(ValidationError::new(failure.to_string()))
    }

    /// Run `validation` against a fresh notification and return it.
    pub fn validating<F>(validation: F) -> Self
    where
        F: FnOnce(&mut Notification) -> Result<(), DomainError>,
    {
        let mut notification = Self::new();
        if let Err(raised) = validation(&mut notification) {
            notification.errors.extend(raised.into_errors());
        }
        notification
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for Notification {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    fn validate<F>(&mut self, validation: F) -> Result<(), DomainError>
    where
        F: FnOnce() -> Result<(), BoxError>,
    {
        if let Err(failure) = validation() {
            match failure.downcast::<DomainError>() {
                Ok(raised) => self.errors.extend(raised.into_errors()),
                Err(other) => self.errors.push(ValidationError::new(other.to_string())),
            }
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Fail-fast handler: the first reported error is returned immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::with_error(error))
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        match other.first_error() {
            Some(first) => Err(DomainError::with_error(first.clone())),
            None => Ok(()),
        }
    }

    fn validate<F>(&mut self, validation: F) -> Result<(), DomainError>
    where
        F: FnOnce() -> Result<(), BoxError>,
    {
        match validation() {
            Ok(()) => Ok(()),
            Err(failure) => match failure.downcast::<DomainError>() {
                Ok(raised) => Err(*raised),
                Err(other) => Err(DomainError::with_error(ValidationError::new(
                    other.to_string(),
                ))),
            },
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}
