use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::domain::validation::{Notification, ValidationError, ValidationHandler};
use crate::services::ServiceError;

pub mod categories;

/// JSON error body shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub errors: Vec<ValidationError>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

impl From<Notification> for ErrorResponse {
    fn from(notification: Notification) -> Self {
        let message = notification
            .first_error()
            .map(|e| e.message.clone())
            .unwrap_or_default();
        Self {
            message,
            errors: notification.into_errors(),
        }
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::message(message))
}

/// Rejected business rules: 422 with every collected error.
pub fn unprocessable(notification: Notification) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse::from(notification))
}

/// Map a raised service error onto its HTTP status.
pub fn service_error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound { .. } => error_response(StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::Repository(message) => {
            log::error!("Unhandled storage failure: {message}");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

/// Register every category endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(categories::create_category)
        .service(categories::list_categories)
        .service(categories::get_category)
        .service(categories::update_category)
        .service(categories::delete_category);
}
