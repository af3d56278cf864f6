//! Medisearch: predictive multi-source search for a hospital portal
//!
//! This is the main entry point for the service.

use anyhow::Result;
use medisearch::{
    config::Settings,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so logging can follow the debug flag
    let settings = load_settings()?;

    FmtSubscriber::builder()
        .with_max_level(if settings.general.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .with_target(false)
        .init();

    info!("Starting Medisearch v{}", medisearch::VERSION);
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    // Initialize HTTP client for the backend
    let client = HttpClient::with_settings(&settings.backend)?;
    info!("Backend client ready for {}", settings.backend.base_url);

    // Create application state
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);
    let state = AppState::new(settings, client);

    // Create router
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Environment variable takes precedence
    if let Ok(path) = std::env::var("MEDISEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("medisearch/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // No settings file found, use defaults
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
