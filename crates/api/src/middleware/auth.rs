//! Bearer-token authentication extractors.
//!
//! Handlers declare the access level they need in their signature:
//! [`Identity`] for any authenticated caller, [`AdminUser`] where the admin
//! flag is required. Rejections flow through [`AppError`] so the client
//! always gets the JSON envelope.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::Identity;
use crate::services::auth::AuthError;
use crate::state::AppState;

/// Pull the bearer token out of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::TokenMissing)?;

    let value = header.to_str().map_err(|_| AuthError::TokenInvalid)?;

    value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::TokenInvalid)
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let identity = state.tokens().verify(token)?;
        Ok(identity)
    }
}

/// An authenticated identity carrying the admin flag.
///
/// Rejects with `Forbidden` for any non-admin caller, regardless of what
/// the request targets.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = Identity::from_request_parts(parts, state).await?;

        if !identity.is_admin {
            return Err(AppError::Forbidden("Access denied: admins only".to_owned()));
        }

        Ok(Self(identity))
    }
}
