//! Errors returned by the HTTP handlers.
//!
//! Client mistakes are reported with their message. Store failures are logged
//! in full and answered with a fixed message so sheet internals never reach
//! the browser.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ErrorBody;
use common::ValidationError;
use log::error;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    #[error("failed to read flights: {0}")]
    ListFailed(#[source] StoreError),

    #[error("failed to add flight: {0}")]
    AppendFailed(#[source] StoreError),
}

impl ApiError {
    fn client_message(&self) -> String {
        match self {
            ApiError::Validation(_) | ApiError::InvalidPayload(_) => self.to_string(),
            ApiError::ListFailed(_) => "Failed to read flights".to_string(),
            ApiError::AppendFailed(_) => "Failed to add flight".to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::ListFailed(_) | ApiError::AppendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            error!("{}", self);
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.client_message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request_with_message() {
        let err = ApiError::from(ValidationError {
            missing: vec!["arrivalTime"],
        });
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.client_message(), "Missing required fields: arrivalTime");
    }

    #[test]
    fn store_failures_hide_details() {
        let err = ApiError::AppendFailed(StoreError::Api {
            status: 403,
            message: "The caller does not have permission".into(),
        });
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Failed to add flight");
        assert!(err.to_string().contains("permission"));
    }
}
