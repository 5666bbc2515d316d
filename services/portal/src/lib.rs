//! Admin portal gateway for the EFMM agency
//!
//! Staff review and approve/reject pending changes submitted by model
//! accounts (profile edits, profile media, timesheets) and manage events.
//! The heavy lifting lives in an external PHP backend; this service reads
//! the admin session from cookies/headers, forwards each request to the
//! backend with the token attached, reshapes the backend's JSON into a
//! normalized envelope, and gates page navigation on a remote session
//! validation.

pub mod backend;
pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod routes;

use crate::{backend::BackendClient, config::PortalConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: PortalConfig,
    pub backend: BackendClient,
}

impl AppState {
    /// Build the state from loaded configuration.
    pub fn new(config: PortalConfig) -> Self {
        let backend = BackendClient::new(config.backend_domain.clone());
        Self { config, backend }
    }
}
