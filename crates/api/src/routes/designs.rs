//! Saved-design route handlers.
//!
//! The 3D configurator saves standalone looks here, independent of any
//! order. Kept unauthenticated: a visitor can design before signing up.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use solelab_core::{Customization, DesignId, first_unstyled};

use crate::envelope::success;
use crate::error::{AppError, Result};
use crate::models::Design;
use crate::state::AppState;

/// Saved design payload.
#[derive(Debug, Deserialize)]
pub struct NewDesignBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub customization: Customization,
}

/// `POST /designs`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewDesignBody>,
) -> Result<impl IntoResponse> {
    let name = body.name.trim();
    if name.is_empty() || body.customization.is_empty() {
        return Err(AppError::Validation(
            "Name and customization data are required".to_owned(),
        ));
    }

    if let Some(region) = first_unstyled(&body.customization) {
        return Err(AppError::Validation(format!(
            "Customization for '{region}' needs a color or a texture"
        )));
    }

    let design = state
        .designs()
        .insert(Design::new(name.to_owned(), body.customization))
        .await;

    Ok((StatusCode::CREATED, success(design)))
}

/// `GET /designs/{id}`
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DesignId>,
) -> Result<impl IntoResponse> {
    let design = state
        .designs()
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound("Design not found".to_owned()))?;

    Ok(success(design))
}
