//! Error handling - maps failures to `{ "message": ... }` responses.

use actix_web::{HttpRequest, HttpResponse, ResponseError, error, http::StatusCode, web};
use blog_shared::MessageResponse;
use std::fmt;

pub const INVALID_DATA: &str = "Invalid data provided.";
pub const POST_NOT_FOUND: &str = "Post not found.";
pub const NOT_FOUND: &str = "Not found.";

/// Application-level error type.
///
/// Bodies only ever carry the fixed message; details go to the log.
#[derive(Debug)]
pub enum AppError {
    /// Missing, blank or mistyped input.
    InvalidData,
    NotFound(&'static str),
    Internal {
        message: &'static str,
        detail: String,
    },
}

impl AppError {
    /// Server-side failure reported to the client as `message`.
    pub fn internal(message: &'static str, detail: impl fmt::Display) -> Self {
        AppError::Internal {
            message,
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidData => write!(f, "Bad request: {}", INVALID_DATA),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal { message, detail } => {
                write!(f, "Internal error: {} ({})", message, detail)
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidData => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::InvalidData => INVALID_DATA,
            AppError::NotFound(msg) => *msg,
            AppError::Internal { message, detail } => {
                tracing::error!("{}: {}", message, detail);
                *message
            }
        };

        HttpResponse::build(self.status_code()).json(MessageResponse::new(message))
    }
}

// Conversion from domain errors
impl From<blog_core::DomainError> for AppError {
    fn from(err: blog_core::DomainError) -> Self {
        match err {
            blog_core::DomainError::Validation(msg) => {
                tracing::debug!("Rejected input: {}", msg);
                AppError::InvalidData
            }
        }
    }
}

/// Body extractor config: malformed or mistyped JSON is invalid data.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        tracing::debug!("Rejected request body: {}", err);
        error::Error::from(AppError::InvalidData)
    })
}

/// Query extractor config: unparseable paging parameters are invalid data.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| {
        tracing::debug!("Rejected query string: {}", err);
        error::Error::from(AppError::InvalidData)
    })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn test_internal_error_hides_detail() {
        let err = AppError::internal("Error retrieving posts.", "connection refused");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let body: MessageResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, MessageResponse::new("Error retrieving posts."));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: AppError = blog_core::DomainError::Validation("title is required".into()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
