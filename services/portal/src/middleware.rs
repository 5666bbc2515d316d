//! Route gate for page navigations
//!
//! Every page request is classified as a public auth page, a protected
//! admin page, or neither. Public pages bounce an already-authenticated
//! admin to the dashboard; protected pages require an admin session that
//! the backend confirms is still live. Validation failures fail closed:
//! the request is redirected to sign-in, never let through.
//!
//! Validation results are not cached; every protected navigation costs one
//! round trip to the backend.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;

use common::credentials::Credentials;

use crate::{AppState, credentials::HeaderStore};

const SIGNIN_PATH: &str = "/";
const DASHBOARD_PATH: &str = "/admin/dashboard";
const ADMIN_PREFIX: &str = "/admin";
const PUBLIC_AUTH_PAGES: &[&str] = &["/", "/forget-password"];

/// How the gate treats a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Sign-in and password recovery; shown to anonymous visitors.
    PublicAuth,
    /// Admin area; requires a remotely confirmed session.
    Protected,
    /// Everything else; passes through untouched.
    Other,
}

pub fn classify(path: &str) -> PathClass {
    if PUBLIC_AUTH_PAGES.contains(&path) {
        PathClass::PublicAuth
    } else if path.starts_with(ADMIN_PREFIX) {
        PathClass::Protected
    } else {
        PathClass::Other
    }
}

/// Gate middleware applied to every page route.
pub async fn route_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let class = classify(req.uri().path());
    let creds = Credentials::read(&HeaderStore(req.headers()));
    let cookie_header = req
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    match class {
        PathClass::PublicAuth => {
            // An admin with a live session has no business on the sign-in
            // page; everyone else sees it unchanged.
            if creds.is_admin() {
                if let Some(token) = creds.token.as_deref() {
                    if state.backend.validate_token(token, cookie_header.as_deref()).await {
                        return Redirect::temporary(DASHBOARD_PATH).into_response();
                    }
                }
            }
            next.run(req).await
        }
        PathClass::Protected => {
            // Local short-circuit: no token or wrong role never reaches the
            // backend.
            let Some(token) = creds.token.clone() else {
                return Redirect::temporary(SIGNIN_PATH).into_response();
            };
            if creds.role.as_deref() != Some("admin") {
                return Redirect::temporary(SIGNIN_PATH).into_response();
            }

            if !state.backend.validate_token(&token, cookie_header.as_deref()).await {
                info!("Stale admin session on {}, redirecting to sign-in", req.uri().path());
                return Redirect::temporary(SIGNIN_PATH).into_response();
            }

            next.run(req).await
        }
        PathClass::Other => next.run(req).await,
    }
}
