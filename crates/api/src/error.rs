//! Unified error handling.
//!
//! Provides a unified `AppError` type converted to the JSON envelope at the
//! request boundary. All route handlers return `Result<T, AppError>`;
//! service-layer errors convert in via `#[from]`. Server-side failures are
//! logged and never leak detail to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::StoreError;
use crate::services::auth::AuthError;
use crate::services::orders::OrderError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order lifecycle operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Document store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Malformed or missing request fields.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authenticated but insufficient role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials
                | AuthError::TokenMissing
                | AuthError::TokenExpired
                | AuthError::TokenInvalid => StatusCode::UNAUTHORIZED,
                // The storefront expects 400 for a duplicate registration.
                AuthError::UserAlreadyExists
                | AuthError::InvalidEmail(_)
                | AuthError::InvalidName
                | AuthError::WeakPassword(_) => StatusCode::BAD_REQUEST,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
                AuthError::Store(err) => store_status(err),
            },
            Self::Order(err) => match err {
                OrderError::Validation(_) => StatusCode::BAD_REQUEST,
                OrderError::OrderNotFound | OrderError::ItemNotFound => StatusCode::NOT_FOUND,
                OrderError::Store(err) => store_status(err),
            },
            Self::Store(err) => store_status(err),
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal details are replaced wholesale.
    fn client_message(&self) -> String {
        match self {
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_owned(),
                AuthError::UserAlreadyExists => "Email address already in use".to_owned(),
                AuthError::InvalidEmail(e) => e.to_string(),
                AuthError::InvalidName => "Name is required".to_owned(),
                AuthError::WeakPassword(msg) => msg.clone(),
                AuthError::UserNotFound => "User not found".to_owned(),
                AuthError::TokenMissing => "Access denied: no token provided".to_owned(),
                AuthError::TokenExpired => "Session token expired".to_owned(),
                AuthError::TokenInvalid => "Invalid session token".to_owned(),
                AuthError::PasswordHash => "Internal server error".to_owned(),
                AuthError::Store(err) => store_message(err),
            },
            Self::Order(err) => match err {
                OrderError::Validation(msg) => msg.clone(),
                OrderError::OrderNotFound => "Order not found".to_owned(),
                OrderError::ItemNotFound => "Item not found".to_owned(),
                OrderError::Store(err) => store_message(err),
            },
            Self::Store(err) => store_message(err),
            Self::Validation(msg) => msg.clone(),
            Self::Forbidden(msg) | Self::NotFound(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".to_owned(),
        }
    }
}

fn store_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Conflict(_) => StatusCode::BAD_REQUEST,
    }
}

fn store_message(err: &StoreError) -> String {
    match err {
        StoreError::NotFound => "Not found".to_owned(),
        StoreError::Conflict(msg) => msg.clone(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request error");
        }

        let envelope_status = if status.is_server_error() {
            "error"
        } else {
            "fail"
        };

        let body = json!({
            "status": envelope_status,
            "message": self.client_message(),
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response_parts(err: AppError) -> (StatusCode, String) {
        (err.status_code(), err.client_message())
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            response_parts(AppError::Validation("bad".into())).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            response_parts(AppError::Forbidden("nope".into())).0,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            response_parts(AppError::NotFound("gone".into())).0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            response_parts(AppError::Internal("boom".into())).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_email_maps_to_400() {
        let (status, message) = response_parts(AppError::Auth(AuthError::UserAlreadyExists));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Email address already in use");
    }

    #[test]
    fn test_expired_token_is_distinguished_from_invalid() {
        let (_, expired) = response_parts(AppError::Auth(AuthError::TokenExpired));
        let (_, invalid) = response_parts(AppError::Auth(AuthError::TokenInvalid));
        assert_ne!(expired, invalid);
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let (_, message) = response_parts(AppError::Internal("connection pool poisoned".into()));
        assert_eq!(message, "Internal server error");
    }
}
