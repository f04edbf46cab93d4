use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub type Result<T> = std::result::Result<T, ApiError>;

/// HTTP-facing error taxonomy.
///
/// Every failure is terminal for its request and reported synchronously.
/// The variants pin the exact status/message pairs of the API contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// The `url` form field is missing or empty.
    MissingUrl,
    /// The token has no live mapping.
    NotFound,
    /// The store write failed while shortening.
    ShortenFailed,
    /// The store read failed while redirecting.
    RetrieveFailed,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::ShortenFailed | ApiError::RetrieveFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::MissingUrl => "URL is required",
            ApiError::NotFound => "URL not found",
            ApiError::ShortenFailed => "Failed to shorten URL",
            ApiError::RetrieveFailed => "Failed to retrieve URL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message()).into_response()
    }
}
