//! Endpoint handlers, one module per relayed resource

use serde_json::{Value, json};

use common::review::ReviewStatus;

use crate::error::{GatewayError, GatewayResult};

pub mod auth;
pub mod event;
pub mod model_account;
pub mod model_profile;
pub mod profile_media;
pub mod timesheet;

/// Status-transition payload shared by the review endpoints: a resource
/// `id`, the target `status_id`, and an optional rejection `reason` that
/// defaults to empty. Presence is checked locally so a bad write never
/// reaches the backend.
pub(crate) struct StatusUpdate {
    pub id: Value,
    pub status_id: Value,
    pub reason: String,
}

impl StatusUpdate {
    pub fn from_body(body: &Value) -> GatewayResult<Self> {
        let id = body
            .get("id")
            .filter(|value| present(value))
            .cloned()
            .ok_or_else(|| GatewayError::BadRequest("ID and Status ID are required".to_string()))?;
        let status_id = body
            .get("status_id")
            .filter(|value| present(value))
            .cloned()
            .ok_or_else(|| GatewayError::BadRequest("ID and Status ID are required".to_string()))?;
        let reason = body
            .get("reason")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(Self { id, status_id, reason })
    }

    /// Label for audit logs; ids outside the known lifecycle fall back to
    /// the raw value.
    pub fn status_label(&self) -> String {
        self.status_id
            .as_i64()
            .and_then(ReviewStatus::from_id)
            .map(|status| status.to_string())
            .unwrap_or_else(|| self.status_id.to_string())
    }

    /// The body forwarded to the backend.
    pub fn payload(&self) -> Value {
        json!({
            "id": self.id,
            "status_id": self.status_id,
            "reason": self.reason,
        })
    }
}

fn present(value: &Value) -> bool {
    !(value.is_null() || value.as_str().is_some_and(str::is_empty))
}
