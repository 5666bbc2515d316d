//! Event endpoints

use axum::{
    Json,
    extract::State,
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
};

/// GET /api/event/get-all-events
pub async fn get_all_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;

    let body = state
        .backend
        .relay(
            Method::GET,
            paths::GET_ALL_EVENTS,
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
                    "total_events": envelope::field_or(&body, "total_events", json!(0)),
                    "events": envelope::field_or(&body, "events", json!([])),
                }))
            },
        )
        .await?;

    Ok(Json(body))
}

/// POST /api/event/add-event
pub async fn add_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;

    info!(
        "Creating event {}",
        body.get("title").and_then(serde_json::Value::as_str).unwrap_or("<untitled>")
    );

    let data = state
        .backend
        .relay(
            Method::POST,
            paths::ADD_EVENT,
            None,
            &creds,
            Some(&body),
            RelayPolicy {
                fallback_message: "Failed to create event",
                fallback_code: StatusCode::INTERNAL_SERVER_ERROR,
                require_success: true,
            },
            |body| body,
        )
        .await?;

    Ok(Json(data))
}
