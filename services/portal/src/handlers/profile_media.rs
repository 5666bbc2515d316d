//! Model profile media endpoints
//!
//! Pending uploads are reviewed against a preview served straight from the
//! backend's public upload directory; the gateway attaches the absolute
//! preview URL so the dashboard never has to know the storage layout.

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

/// Where pending model media is served from under the public asset domain.
const PENDING_MEDIA_PREFIX: &str = "/Upload/model/pending/modelMedia";

fn attach_preview_url(asset_domain: &str, item: &mut Value) {
    let Some(file_name) = item.get("file_name").and_then(Value::as_str) else {
        return;
    };
    let url = format!("{asset_domain}{PENDING_MEDIA_PREFIX}/{file_name}");
    if let Some(map) = item.as_object_mut() {
        map.insert("preview_url".to_string(), Value::String(url));
    }
}

/// GET /api/model-profile-media/get-all-pending-media
pub async fn get_all_pending(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;
    let asset_domain = state.config.asset_domain.clone();

    let body = state
        .backend
        .relay(
            Method::GET,
            paths::GET_ALL_PENDING_MEDIA,
            None,
            &creds,
            None,
            RelayPolicy {
                fallback_message: "Backend error",
                fallback_code: StatusCode::BAD_REQUEST,
                require_success: false,
            },
            move |body| {
                let mut updates = envelope::field_or(&body, "data", json!([]));
                if let Some(items) = updates.as_array_mut() {
                    for item in items {
                        attach_preview_url(&asset_domain, item);
                    }
                }
                envelope::success(json!({ "updates": updates }))
            },
        )
        .await?;

    Ok(Json(body))
}

/// GET /api/model-profile-media/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    jar: CookieJar,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;
    let asset_domain = state.config.asset_domain.clone();

    let data = state
        .backend
        .relay(
            Method::GET,
            paths::GET_PENDING_MEDIA_BY_ID,
            Some(("id", &id)),
            &creds,
            None,
            RelayPolicy {
                fallback_message: "Failed to fetch media update details",
                fallback_code: StatusCode::BAD_REQUEST,
                require_success: true,
            },
            move |mut body| {
                if let Some(data) = body.get_mut("data") {
                    attach_preview_url(&asset_domain, data);
                }
                body
            },
        )
        .await?;

    Ok(Json(data))
}

/// POST /api/model-profile-media/approve-media
pub async fn approve_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> GatewayResult<Json<Value>> {
    let creds = require_admin(&headers, &jar)?;
    let update = StatusUpdate::from_body(&body)?;

    info!("Reviewing profile media {}: {}", update.id, update.status_label());

    let data = state
        .backend
        .relay(
            Method::POST,
            paths::APPROVE_PENDING_MEDIA,
            None,
            &creds,
            Some(&update.payload()),
            RelayPolicy {
                fallback_message: "Failed to update media status",
                fallback_code: StatusCode::INTERNAL_SERVER_ERROR,
                require_success: true,
            },
            |body| body,
        )
        .await?;

    Ok(Json(data))
}
