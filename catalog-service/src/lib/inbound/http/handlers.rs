use auth::TokenError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;

use crate::clothes::errors::ClothesError;
use crate::user::errors::UserError;

pub mod create_clothes;
pub mod get_clothes;
pub mod list_clothes;
pub mod register;

/// HTTP boundary error.
///
/// Every typed domain error is translated here into a status code and a
/// `{"detail": "..."}` body; nothing is silently swallowed and nothing is
/// retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                // Internals stay in the log, not on the wire
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => ApiError::NotFound(err.to_string()),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidEmail(_) | UserError::InvalidFullName(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::InvalidRole(_)
            | UserError::PasswordHash(_)
            | UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ClothesError> for ApiError {
    fn from(err: ClothesError) -> Self {
        match err {
            ClothesError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ClothesError::InvalidColor(_)
            | ClothesError::InvalidSize(_)
            | ClothesError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            // Expired is surfaced distinctly so clients can prompt re-login
            TokenError::Expired => ApiError::Unauthorized("Token is expired".to_string()),
            TokenError::Malformed | TokenError::SignatureInvalid => {
                ApiError::Unauthorized("Invalid token".to_string())
            }
            TokenError::Encoding(msg) => ApiError::InternalServerError(msg),
        }
    }
}
