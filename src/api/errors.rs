// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// JSON error envelope returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    /// A required file part was absent from the multipart body
    MissingField(String),
    /// A parameter or part failed validation
    ValidationError { field: String, message: String },
    /// An uploaded file is not an accepted image type
    UnsupportedMediaType { field: String, media_type: String },
    /// An uploaded file exceeds the configured per-file limit
    PayloadTooLarge { field: String, limit: usize },
    /// The remote try-on call failed; detail stays server-side
    CollaboratorError,
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        // Collaborator detail is logged where the error is caught, never
        // echoed back to the caller.
        let error = match self {
            ApiError::CollaboratorError => "virtual try-on generation failed".to_string(),
            other => other.to_string(),
        };

        ErrorResponse {
            success: false,
            error,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingField(_)
            | ApiError::ValidationError { .. }
            | ApiError::PayloadTooLarge { .. } => 400,
            ApiError::UnsupportedMediaType { .. } => 415,
            ApiError::CollaboratorError => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingField(field) => write!(f, "missing file field '{}'", field),
            ApiError::ValidationError { field, message } => {
                write!(f, "invalid {}: {}", field, message)
            }
            ApiError::UnsupportedMediaType { field, media_type } => {
                write!(
                    f,
                    "unsupported media type '{}' for '{}'; accepted: image/jpeg, image/png",
                    media_type, field
                )
            }
            ApiError::PayloadTooLarge { field, limit } => {
                write!(f, "file '{}' exceeds maximum size of {} bytes", field, limit)
            }
            ApiError::CollaboratorError => write!(f, "try-on service call failed"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_client_error() {
            warn!("request rejected: {}", self);
        }

        (status, Json(self.to_response())).into_response()
    }
}
