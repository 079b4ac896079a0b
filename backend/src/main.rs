//! Weather History Service - Server binary

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_history_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "wh_server=debug,weather_history_backend=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.log.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Weather History Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Archive directory: {}", config.data.dir);

    let state = AppState::new(config.clone());

    if config.data.preload {
        tracing::info!("Preloading archives...");
        let loaded = state.archives.preload().await?;
        tracing::info!("Preloaded {} archives", loaded);
    }

    // Build application
    let app = create_app(state);

    // Start server
    let addr = config.bind_address();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
