//! Gateway error taxonomy
//!
//! Every handler catches failures at its boundary and answers with the
//! normalized `{status: "error", message}` envelope; nothing escapes as a
//! panic or a raw framework error. The HTTP status always mirrors the
//! envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use common::envelope;

/// Failure classes a relayed request can hit.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Missing token or a role other than admin; the backend is never called.
    #[error("Unauthorized: Missing token or role")]
    Unauthorized,

    /// A required identifier is missing from a write; fails locally.
    #[error("{0}")]
    BadRequest(String),

    /// The backend answered with something other than JSON.
    #[error("Invalid backend response")]
    InvalidBackendResponse,

    /// The backend reported a failure of its own; relayed verbatim.
    #[error("{message}")]
    Backend { message: String, code: StatusCode },

    /// Transport failure or anything else unexpected.
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            GatewayError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            GatewayError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            GatewayError::InvalidBackendResponse => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            GatewayError::Backend { message, code } => (code, message),
            GatewayError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        (status, Json(envelope::error(&message))).into_response()
    }
}

/// Type alias for handler results
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: GatewayError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn statuses_mirror_the_taxonomy() {
        assert_eq!(status_of(GatewayError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(GatewayError::BadRequest("Timesheet ID is required".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(GatewayError::InvalidBackendResponse),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(GatewayError::Backend {
                message: "No pending media".into(),
                code: StatusCode::NOT_FOUND,
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(GatewayError::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
