use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use portal::{AppState, config::PortalConfig, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting admin portal gateway");

    let config = PortalConfig::from_env()?;
    info!("Forwarding to backend at {}", config.backend_domain);

    let state = AppState::new(config.clone());

    // Start the web server
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Admin portal listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
