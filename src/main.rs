//! SerpBait service entry point

use anyhow::Result;
use serpbait::{
    config::Settings,
    telemetry,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let settings = load_settings()?;

    // Initialize logging — explicit, before anything else runs
    telemetry::init(&settings)?;

    info!("Starting SerpBait v{}", serpbait::VERSION);
    info!(
        instance = %settings.general.instance_name,
        provider = ?settings.search.provider,
        "configuration loaded"
    );

    // Create application state
    let state = AppState::new(settings.clone())?;
    info!("Application state initialized");

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("SERPBAIT_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Conventional locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("serpbait/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
