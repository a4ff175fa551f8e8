//! Authentication and account route handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::envelope::{success, success_message};
use crate::error::{AppError, Result};
use crate::models::{Order, User};
use crate::services::auth::AuthError;
use crate::services::{AuthService, Identity};
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Password change payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordBody {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

/// Login response data.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub token: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

/// Dashboard response data.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub user: User,
    pub orders: Vec<Order>,
}

// =============================================================================
// Handlers
// =============================================================================

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.users(), state.tokens());
    let user = auth
        .register(&body.name, &body.email, &body.password)
        .await?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok((
        StatusCode::CREATED,
        success_message("User registered successfully"),
    ))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.users(), state.tokens());
    let (user, token) = auth.login(&body.email, &body.password).await?;

    Ok(success(LoginData {
        token,
        is_admin: user.is_admin,
    }))
}

/// `PUT /change-password`
pub async fn change_password(
    State(state): State<AppState>,
    identity: Identity,
    Json(body): Json<ChangePasswordBody>,
) -> Result<impl IntoResponse> {
    let auth = AuthService::new(state.users(), state.tokens());
    auth.change_password(identity.user_id, &body.old_password, &body.new_password)
        .await?;

    Ok(success_message("Password updated successfully"))
}

/// `GET /dashboard`
pub async fn dashboard(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<impl IntoResponse> {
    let user = state
        .users()
        .get(identity.user_id)
        .await
        .ok_or(AppError::Auth(AuthError::UserNotFound))?;

    let orders = state.orders().list_for_user(identity.user_id).await;

    Ok(success(DashboardData { user, orders }))
}
