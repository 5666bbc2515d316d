//! Service configuration loaded from the environment

use anyhow::Result;

/// Portal gateway configuration
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Base URL of the PHP backend all requests are forwarded to
    pub backend_domain: String,
    /// Public base URL for media previews (uploads are served from here)
    pub asset_domain: String,
    /// Address the portal listens on
    pub bind_addr: String,
}

impl PortalConfig {
    /// Create a new PortalConfig from environment variables
    ///
    /// # Environment Variables
    /// - `BACKEND_DOMAIN`: base URL of the PHP backend (required)
    /// - `PUBLIC_ASSET_DOMAIN`: base URL for media previews (default: same as `BACKEND_DOMAIN`)
    /// - `PORTAL_BIND_ADDR`: listen address (default: "0.0.0.0:3000")
    pub fn from_env() -> Result<Self> {
        let backend_domain = std::env::var("BACKEND_DOMAIN")
            .map_err(|_| anyhow::anyhow!("BACKEND_DOMAIN environment variable not set"))?;
        let backend_domain = normalize_base_url(&backend_domain);

        let asset_domain = std::env::var("PUBLIC_ASSET_DOMAIN")
            .map(|url| normalize_base_url(&url))
            .unwrap_or_else(|_| backend_domain.clone());

        let bind_addr =
            std::env::var("PORTAL_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Ok(Self {
            backend_domain,
            asset_domain,
            bind_addr,
        })
    }
}

/// Trim trailing slashes so paths can be appended verbatim.
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
