//! Outbound client for the PHP backend
//!
//! One best-effort HTTP call per relayed request: no retries, no timeouts,
//! no circuit breaking. The bearer token and a synthesized `Cookie:
//! role=<role>` header are attached when present, the reply is decoded once
//! into a tagged [`BackendReply`] at this boundary, and handlers only supply
//! the final mapping from the backend's body to their documented envelope.

use axum::http::StatusCode;
use reqwest::{Client, Method};
use serde_json::Value;
use tracing::{error, warn};

use common::{credentials::Credentials, envelope};

use crate::error::{GatewayError, GatewayResult};

/// Backend paths, one per relayed operation.
pub mod paths {
    pub const SIGNIN: &str = "/admin/auth/signin.php";
    pub const VALIDATE_TOKEN: &str = "/admin/auth/validate_token/valid_admin.php";

    pub const ADD_EVENT: &str = "/admin/event/addEvent.php";
    pub const GET_ALL_EVENTS: &str = "/admin/event/getAllEvents.php";

    pub const GET_MODEL_ACCOUNT_BY_ID: &str = "/admin/model_account/getModelAccountById.php";
    pub const UPDATE_MODEL_STATUS: &str = "/admin/model_account/updateModelStatus.php";

    pub const GET_ALL_PROFILE_UPDATES: &str = "/admin/model_profile/getAllProfileUpdates.php";
    pub const GET_PROFILE_UPDATE_BY_ID: &str = "/admin/model_profile/getProfileUpdateById.php";
    pub const UPDATE_PROFILE_STATUS: &str = "/admin/model_profile/updateProfileStatus.php";

    pub const GET_ALL_PENDING_MEDIA: &str = "/admin/model_profile_media/getAllPendingMedia.php";
    pub const GET_PENDING_MEDIA_BY_ID: &str = "/admin/model_profile_media/getPendingMediaById.php";
    pub const APPROVE_PENDING_MEDIA: &str = "/admin/model_profile_media/approvePendingMedia.php";

    pub const GET_ALL_TIMESHEETS: &str = "/admin/timesheet/getAllTimesheets.php";
    pub const GET_TIMESHEET_BY_ID: &str = "/admin/timesheet/getTimesheetById.php";
    pub const UPDATE_TIMESHEET: &str = "/admin/timesheet/updateTimesheet.php";
}

/// Backend reply decoded at the forwarding boundary.
#[derive(Debug, PartialEq)]
pub enum BackendReply {
    /// Usable body from a 2xx reply.
    Ok(Value),
    /// Non-OK status, or a body that signals failure.
    Err {
        message: Option<String>,
        code: StatusCode,
    },
}

impl BackendReply {
    /// Decode a raw backend body. Non-JSON is a backend contract violation,
    /// never a client error. With `require_success`, a 2xx body must say
    /// `status: "success"` explicitly; otherwise only an explicit
    /// `status: "error"` counts as failure.
    fn decode(code: StatusCode, raw: &str, require_success: bool) -> GatewayResult<Self> {
        let body: Value =
            serde_json::from_str(raw).map_err(|_| GatewayError::InvalidBackendResponse)?;

        let failed = !code.is_success()
            || if require_success {
                !envelope::is_success(&body)
            } else {
                envelope::is_error(&body)
            };

        if failed {
            return Ok(BackendReply::Err {
                message: envelope::message(&body),
                code,
            });
        }

        Ok(BackendReply::Ok(body))
    }
}

/// Per-operation relay policy: the fallback message and status code used
/// when the backend reports failure without usable details, and whether a
/// 2xx body must claim success explicitly.
#[derive(Debug, Clone, Copy)]
pub struct RelayPolicy<'a> {
    pub fallback_message: &'a str,
    pub fallback_code: StatusCode,
    pub require_success: bool,
}

/// Authenticated forwarder for the PHP backend.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a single authenticated request and return the raw reply.
    /// Transport failures are logged and surface as internal errors.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        query: Option<(&str, &str)>,
        creds: &Credentials,
        body: Option<&Value>,
    ) -> GatewayResult<reqwest::Response> {
        let mut request = self.http.request(method, self.url(path));

        if let Some(pair) = query {
            request = request.query(&[pair]);
        }
        if let Some(token) = &creds.token {
            request = request.bearer_auth(token);
        }
        if let Some(role) = &creds.role {
            request = request.header(reqwest::header::COOKIE, format!("role={role}"));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|e| {
            error!("Backend request to {path} failed: {e}");
            GatewayError::Internal
        })
    }

    /// The shared forward-and-normalize path behind every relayed
    /// operation: forward, decode into a tagged reply, relay backend
    /// failures under `policy`, then apply the caller's mapping to the
    /// success body.
    pub async fn relay<F>(
        &self,
        method: Method,
        path: &str,
        query: Option<(&str, &str)>,
        creds: &Credentials,
        body: Option<&Value>,
        policy: RelayPolicy<'_>,
        map: F,
    ) -> GatewayResult<Value>
    where
        F: FnOnce(Value) -> Value,
    {
        let response = self.forward(method, path, query, creds, body).await?;
        let code = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let raw = response.text().await.map_err(|e| {
            error!("Reading backend reply from {path} failed: {e}");
            GatewayError::Internal
        })?;

        match BackendReply::decode(code, &raw, policy.require_success)? {
            BackendReply::Ok(body) => Ok(map(body)),
            BackendReply::Err { message, code } => {
                let message = message.unwrap_or_else(|| policy.fallback_message.to_string());
                // A 2xx reply whose body denies success has no useful status
                // code of its own; the per-operation fallback applies.
                let code = if code.is_success() { policy.fallback_code } else { code };
                warn!("Backend at {path} reported failure ({code}): {message}");
                Err(GatewayError::Backend { message, code })
            }
        }
    }

    /// Ask the backend whether `token` still names a live admin session.
    /// Fails closed: transport errors, non-OK statuses, empty or malformed
    /// bodies, and anything but an explicit `valid: true` all count as
    /// invalid. Never propagates an error.
    pub async fn validate_token(&self, token: &str, cookie_header: Option<&str>) -> bool {
        let mut request = self
            .http
            .post(self.url(paths::VALIDATE_TOKEN))
            .bearer_auth(token);
        if let Some(cookies) = cookie_header {
            request = request.header(reqwest::header::COOKIE, cookies.to_owned());
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Token validation request failed: {e}");
                return false;
            }
        };

        if !response.status().is_success() {
            return false;
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(_) => return false,
        };

        body.get("valid").and_then(Value::as_bool) == Some(true)
    }
}
