use actix_web::http::header;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Every handler failure maps onto one of these; the body is always `{"error": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Method {method} Not Allowed")]
    MethodNotAllowed { method: String, allow: &'static str },

    #[error("{0}")]
    Internal(String),

    #[error("Failed to generate message")]
    Generation { details: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) | Self::Generation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        match self {
            Self::MethodNotAllowed { allow, .. } => {
                builder.insert_header((header::ALLOW, *allow));
            }
            Self::Internal(message) => {
                tracing::error!(error = %message, "request failed");
            }
            Self::Generation { details } => {
                tracing::error!(error = %details, "message generation failed");
                return builder.json(json!({
                    "error": self.to_string(),
                    "details": details,
                }));
            }
            _ => {}
        }
        builder.json(json!({ "error": self.to_string() }))
    }
}
