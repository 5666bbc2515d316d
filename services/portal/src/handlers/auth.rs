//! Sign-in and token validation endpoints

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use reqwest::Method;
use serde::Serialize;
use serde_json::{Value, json};
use time::Duration;
use tracing::info;

use common::{credentials::Credentials, envelope};

use crate::{
    AppState,
    backend::{RelayPolicy, paths},
    error::{GatewayError, GatewayResult},
};

/// Admin sessions live for seven days, matching the backend's token expiry.
const SESSION_MAX_AGE: Duration = Duration::days(7);

/// Response for token validation
#[derive(Serialize)]
struct ValidationReply {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

fn session_cookie(name: &'static str, value: String, http_only: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(http_only)
        .secure(true)
        .max_age(SESSION_MAX_AGE)
        .path("/")
        .same_site(SameSite::Strict)
        .build()
}

/// POST /api/auth/signin
///
/// Forwards the credentials to the backend and, on success, mirrors the
/// returned session into cookies. The token cookie is httpOnly; role,
/// admin_id and username are readable by the dashboard.
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<Value>,
) -> GatewayResult<(CookieJar, Json<Value>)> {
    info!(
        "Admin sign-in attempt for {}",
        body.get("email").and_then(serde_json::Value::as_str).unwrap_or("<unknown>")
    );

    let data = state
        .backend
        .relay(
            Method::POST,
            paths::SIGNIN,
            None,
            &Credentials::default(),
            Some(&body),
            RelayPolicy {
                fallback_message: "Admin login failed",
                fallback_code: StatusCode::BAD_REQUEST,
                require_success: false,
            },
            |body| body,
        )
        .await?;

    // The session fields are the backend's side of the contract; a success
    // reply without them is as malformed as non-JSON.
    let token = data
        .get("token")
        .and_then(Value::as_str)
        .ok_or(GatewayError::InvalidBackendResponse)?
        .to_string();
    let role = data
        .get("role")
        .and_then(Value::as_str)
        .ok_or(GatewayError::InvalidBackendResponse)?
        .to_string();
    let username = data
        .get("username")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let email = data
        .get("email")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let admin_id = match data.get("admin_id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };

    let jar = jar
        .add(session_cookie("token", token, true))
        .add(session_cookie("role", role.clone(), false))
        .add(session_cookie("admin_id", admin_id, false))
        .add(session_cookie("username", username.clone(), false));

    info!("Admin {username} signed in");

    Ok((
        jar,
        Json(envelope::success(json!({
            "message": "Admin login successful",
            "username": username,
            "email": email,
            "role": role,
        }))),
    ))
}

/// POST /api/auth/token-validation
///
/// Confirms the bearer token against the backend. Answers `{valid: bool}`
/// rather than the resource envelope; the dashboard polls this shape.
pub async fn token_validation(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let Some(token) = token else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ValidationReply {
                valid: false,
                message: Some("No token provided"),
            }),
        )
            .into_response();
    };

    let cookie_header = headers.get(header::COOKIE).and_then(|value| value.to_str().ok());

    if state.backend.validate_token(token, cookie_header).await {
        (StatusCode::OK, Json(ValidationReply { valid: true, message: None })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(ValidationReply { valid: false, message: None }),
        )
            .into_response()
    }
}
