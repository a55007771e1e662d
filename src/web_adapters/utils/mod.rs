use std::fmt::Debug;

use actix_web::{error::InternalError, web::JsonConfig, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};
use use_cases::UseCaseError;

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Unprocessable Entity
pub fn response_422(error_message: &str) -> HttpResponse {
    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Some unexpected error happened. Please try again later.".to_string(),
    })
}

pub fn response_from_use_case_error(e: UseCaseError) -> HttpResponse {
    match &e {
        UseCaseError::ValidationFailed(message) => response_422(message),
        UseCaseError::NotFound(message) => response_404(message),
        UseCaseError::InternalServerError(_) => response_500(e),
    }
}

/// Request bodies that do not deserialize into the expected shape are
/// answered the same way as failed validation.
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, response_422(&message)).into()
    })
}
