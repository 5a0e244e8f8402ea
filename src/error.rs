use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use common::ErrorResponse;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Every variant maps to a status code and a stable machine-readable code so
/// the frontend can branch on failures without parsing messages.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No image file provided. Use the 'image' field.")]
    MissingImage,

    #[error("Uploaded file is not a valid image: {0}")]
    InvalidImage(String),

    #[error("Image exceeds the {limit} byte upload limit (got {size} bytes)")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Failed to read multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Model service request failed: {0}")]
    Upstream(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingImage
            | ApiError::InvalidImage(_)
            | ApiError::PayloadTooLarge { .. }
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::MissingImage => "NO_IMAGE",
            ApiError::InvalidImage(_) => "INVALID_IMAGE",
            ApiError::PayloadTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            ApiError::Multipart(_) => "MALFORMED_MULTIPART",
            ApiError::Upstream(_) => "MODEL_UNAVAILABLE",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            success: false,
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_variants_map_to_400() {
        assert_eq!(ApiError::MissingImage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidImage("not a PNG".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PayloadTooLarge {
                size: 11_000_000,
                limit: 10_485_760
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_maps_to_502() {
        assert_eq!(
            ApiError::Upstream("timeout".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ApiError::MissingImage.code(), "NO_IMAGE");
        assert_eq!(ApiError::Upstream("x".into()).code(), "MODEL_UNAVAILABLE");
    }
}
