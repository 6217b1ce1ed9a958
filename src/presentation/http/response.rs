// src/presentation/http/response.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upper-cases the first letter of every space-separated word longer than one
/// character. Single-letter words and spacing are left as they are.
pub fn title_case(message: &str) -> String {
    message
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match (chars.next(), chars.next()) {
                (Some(first), Some(_)) => {
                    let mut out: String = first.to_uppercase().collect();
                    out.push_str(&word[first.len_utf8()..]);
                    out
                }
                _ => word.to_owned(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// `{status, message, statusCode, data}` wrapper for successful calls.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(
    rename_all = "camelCase",
    bound(
        serialize = "T: Serialize",
        deserialize = "T: serde::de::DeserializeOwned"
    )
)]
pub struct ApiResponse<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, message: &str, data: Option<T>) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            message: title_case(message),
            status_code: status.as_u16(),
            data,
        }
    }

    pub fn ok(message: &str, data: T) -> Self {
        Self::new(StatusCode::OK, message, Some(data))
    }

    pub fn created(message: &str, data: T) -> Self {
        Self::new(StatusCode::CREATED, message, Some(data))
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> Self {
        Self::new(StatusCode::OK, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Body of every error response, and of successful calls without data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub status: EnvelopeStatus,
    pub message: String,
    pub status_code: u16,
}
