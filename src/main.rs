use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use toolshed::infrastructure::AppState;
use toolshed::{config, db, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolshed=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url).await.map_err(|e| {
        tracing::error!("Failed to initialize database: {}", e);
        e
    })?;

    let app = server::build_router(AppState::new(db), &config.cors_allowed_origins);

    server::serve(app, config.port).await?;

    tracing::info!("Server stopped");
    Ok(())
}
