//! Portal router
//!
//! `/api` carries the JSON endpoints; everything else is a page navigation
//! guarded by the route gate. The gate is layered on the page routes only,
//! mirroring the navigation surface it classifies.

use axum::{
    Json, Router,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{AppState, handlers, middleware::route_gate, pages};

/// Create the router for the portal gateway
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/signin", post(handlers::auth::signin))
        .route("/auth/token-validation", post(handlers::auth::token_validation))
        .route("/event/add-event", post(handlers::event::add_event))
        .route("/event/get-all-events", get(handlers::event::get_all_events))
        .route("/model-account/update-status", post(handlers::model_account::update_status))
        .route("/model-account/:id", get(handlers::model_account::get_by_id))
        .route(
            "/model-profile/get-all-profile-updates",
            get(handlers::model_profile::get_all_updates),
        )
        .route("/model-profile/update-status", post(handlers::model_profile::update_status))
        .route("/model-profile/:id", get(handlers::model_profile::get_by_id))
        .route(
            "/model-profile-media/get-all-pending-media",
            get(handlers::profile_media::get_all_pending),
        )
        .route(
            "/model-profile-media/approve-media",
            post(handlers::profile_media::approve_media),
        )
        .route("/model-profile-media/:id", get(handlers::profile_media::get_by_id))
        .route("/timesheet/get-all-timesheets", get(handlers::timesheet::get_all))
        .route("/timesheet/:id", get(handlers::timesheet::get_by_id))
        .route("/timesheet/:id/update", post(handlers::timesheet::update));

    let pages = Router::new()
        .route("/", get(pages::signin))
        .route("/forget-password", get(pages::forget_password))
        .route("/health", get(health_check))
        .route("/admin/dashboard", get(pages::dashboard))
        .route("/admin/*section", get(pages::admin_section))
        .route_layer(middleware::from_fn_with_state(state.clone(), route_gate));

    Router::new().nest("/api", api).merge(pages).with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "admin-portal"
    }))
}
