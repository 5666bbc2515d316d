//! Timesheet endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use axum_extra::extract::CookieJar;
use reqwest::Method;
use serde_json::{Map, Value, json};
use tracing::info;

use common::envelope;

use crate::{
    AppState,
    backend::{RelayPolicy, paths},
    credentials::require_admin,
    error::{GatewayError, GatewayResult},
};

/// GET /api/timesheet/get-all-timesheets
pub async fn get_all(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;

    let body = state
        .backend
        .relay(
            Method::GET,
            paths::GET_ALL_TIMESHEETS,
            None,
            &creds,
            None,
            RelayPolicy {
                fallback_message: "Failed to fetch timesheets",
                fallback_code: StatusCode::BAD_REQUEST,
                require_success: false,
            },
            |body| {
                envelope::success(json!({
                    "timesheets": envelope::field_or(&body, "timesheets", json!([])),
                }))
            },
        )
        .await?;

    Ok(Json(body))
}

/// GET /api/timesheet/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;

    if id.trim().is_empty() {
        return Err(GatewayError::BadRequest("Timesheet ID is required".to_string()));
    }

    let body = state
        .backend
        .relay(
            Method::GET,
            paths::GET_TIMESHEET_BY_ID,
            Some(("id", &id)),
            &creds,
            None,
            RelayPolicy {
                fallback_message: "Failed to fetch timesheet",
                fallback_code: StatusCode::INTERNAL_SERVER_ERROR,
                require_success: true,
            },
            |body| {
                envelope::success(json!({
                    "timesheet": envelope::field_or(&body, "timesheet", Value::Null),
                }))
            },
        )
        .await?;

    Ok(Json(body))
}

/// POST /api/timesheet/:id/update
///
/// The path id wins over any id in the body; the rest of the body is
/// forwarded as the timesheet's new fields.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;

    if id.trim().is_empty() {
        return Err(GatewayError::BadRequest("Timesheet ID is required".to_string()));
    }

    let mut merged = body.as_object().cloned().unwrap_or_else(Map::new);
    merged.insert("id".to_string(), Value::String(id.clone()));

    info!("Updating timesheet {id}");

    let data = state
        .backend
        .relay(
            Method::POST,
            paths::UPDATE_TIMESHEET,
            None,
            &creds,
            Some(&Value::Object(merged)),
            RelayPolicy {
                fallback_message: "Failed to update timesheet",
                fallback_code: StatusCode::INTERNAL_SERVER_ERROR,
                require_success: true,
            },
            |body| {
                let mut fields = Map::new();
                if let Some(message) = envelope::message(&body) {
                    fields.insert("message".to_string(), Value::String(message));
                }
                envelope::success(Value::Object(fields))
            },
        )
        .await?;

    Ok(Json(data))
}
