//! Model profile update endpoints
//!
//! Profile-field edits land in a pending queue; staff approve them as-is,
//! approve with an edited value, or reject with a reason.

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use axum_extra::extract::CookieJar;
use reqwest::Method;
use serde_json::{Value, json};
use tracing::info;

use common::envelope;

use crate::{
    AppState,
    backend::{RelayPolicy, paths},
    credentials::require_admin,
    error::GatewayResult,
    handlers::StatusUpdate,
};

/// GET /api/model-profile/get-all-profile-updates
pub async fn get_all_updates(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;

    let body = state
        .backend
        .relay(
            Method::GET,
            paths::GET_ALL_PROFILE_UPDATES,
            None,
            &creds,
            None,
            RelayPolicy {
                fallback_message: "Backend error",
                fallback_code: StatusCode::BAD_REQUEST,
                require_success: false,
            },
            |body| {
                envelope::success(json!({
                    "updates": envelope::field_or(&body, "data", json!([])),
                }))
            },
        )
        .await?;

    Ok(Json(body))
}

/// GET /api/model-profile/:id
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
            paths::GET_PROFILE_UPDATE_BY_ID,
            Some(("id", &id)),
            &creds,
            None,
            RelayPolicy {
                fallback_message: "Failed to fetch profile update details",
                fallback_code: StatusCode::BAD_REQUEST,
                require_success: true,
            },
            |body| body,
        )
        .await?;

    Ok(Json(data))
}

/// POST /api/model-profile/update-status
///
/// Approvals may carry a `new_value` edited by the reviewer; it is
/// forwarded alongside the transition.
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;
    let update = StatusUpdate::from_body(&body)?;

    let mut payload = update.payload();
    if let Some(new_value) = body.get("new_value") {
        payload["new_value"] = new_value.clone();
    }

    info!("Reviewing profile update {}: {}", update.id, update.status_label());

    let data = state
        .backend
        .relay(
            Method::POST,
            paths::UPDATE_PROFILE_STATUS,
            None,
            &creds,
            Some(&payload),
            RelayPolicy {
                fallback_message: "Failed to update profile status",
                fallback_code: StatusCode::INTERNAL_SERVER_ERROR,
                require_success: true,
            },
            |body| body,
        )
        .await?;

    Ok(Json(data))
}
