// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use crate::presentation::http::response::{EnvelopeStatus, MessageResponse, title_case};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_internal() {
            tracing::error!(error = %err, "request failed");
            return Self::internal();
        }

        match err {
            ApplicationError::Validation(msg) | ApplicationError::BadRequest(msg) => {
                Self::bad_request(msg)
            }
            ApplicationError::NotFound(msg) => Self::not_found(msg),
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::bad_request(msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::Persistence(_) => Self::internal(),
        }
    }

    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from_error(err.into())
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = MessageResponse {
            status: EnvelopeStatus::Error,
            message: title_case(&self.message),
            status_code: self.status.as_u16(),
        };
        (self.status, Json(payload)).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failures_hide_their_cause() {
        let err = HttpError::from_error(DomainError::persistence("connection reset").into());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn business_failures_keep_their_message() {
        let err = HttpError::from_error(ApplicationError::bad_request("Comment already liked"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Comment already liked");

        let err = HttpError::from_error(ApplicationError::not_found("Comment not found"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn domain_validation_is_a_bad_request() {
        let err = HttpError::from(DomainError::validation("name must not be empty"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "name must not be empty");
    }

    #[test]
    fn only_store_failures_are_internal() {
        assert!(ApplicationError::from(DomainError::persistence("timeout")).is_internal());
        assert!(!ApplicationError::from(DomainError::validation("bad id")).is_internal());
        assert!(!ApplicationError::not_found("Profile not found").is_internal());

        let err = HttpError::from_error(DomainError::Conflict("likes out of sync".into()).into());
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }
}
