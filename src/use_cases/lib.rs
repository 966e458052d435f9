use std::fmt::Debug;

pub mod filters;
pub mod forms;
pub mod notes;
pub mod tags;
pub mod users;

pub use forms::FormErrors;

#[derive(Debug)]
pub enum UseCaseError {
    Unauthorized,                // 401
    NotFound(String),            // 404
    Conflict(String),            // 409
    Invalid(FormErrors),         // form re-render
    InternalServerError(String), // 500
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
