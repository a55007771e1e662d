use std::fmt::Debug;

pub mod params;
pub mod tags;
pub mod types;
pub mod validation;

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ValidationFailed(String),    // 422
    NotFound(String),            // 404
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}

pub(crate) fn tag_not_found(tag_id: i32) -> UseCaseError {
    UseCaseError::NotFound(format!("Tag with ID {} not found", tag_id))
}

pub(crate) fn param_not_found(param_id: i32) -> UseCaseError {
    UseCaseError::NotFound(format!("Parameter with ID {} not found", param_id))
}
