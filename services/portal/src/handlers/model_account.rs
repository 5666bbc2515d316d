//! Model account endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use axum_extra::extract::CookieJar;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

use crate::{
    AppState,
    backend::{RelayPolicy, paths},
    credentials::require_admin,
    error::GatewayResult,
    handlers::StatusUpdate,
};

/// GET /api/model-account/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;

    let data = state
        .backend
        .relay(
            Method::GET,
            paths::GET_MODEL_ACCOUNT_BY_ID,
            Some(("id", &id)),
            &creds,
            None,
            RelayPolicy {
                fallback_message: "Failed to fetch model details",
                fallback_code: StatusCode::BAD_REQUEST,
                require_success: true,
            },
            |body| body,
        )
        .await?;

    Ok(Json(data))
}

/// POST /api/model-account/update-status
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;
    let update = StatusUpdate::from_body(&body)?;

    info!("Reviewing model account {}: {}", update.id, update.status_label());

    let data = state
        .backend
        .relay(
            Method::POST,
            paths::UPDATE_MODEL_STATUS,
            None,
            &creds,
            Some(&update.payload()),
            RelayPolicy {
                fallback_message: "Failed to update status",
                fallback_code: StatusCode::INTERNAL_SERVER_ERROR,
                require_success: true,
            },
            |body| body,
        )
        .await?;

    Ok(Json(data))
}
