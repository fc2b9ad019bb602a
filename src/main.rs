use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use sheetdrop::{config::Config, table_registry::TableRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sheetdrop=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Connect to database
    let pool = sheetdrop::db::create_pool(&config.database).await?;
    info!("Database connection established");

    // Create shared state. Tables are declared on demand per upload, so
    // there is no migration step; the registry starts empty.
    let state = sheetdrop::AppState {
        pool,
        config: config.clone(),
        table_registry: TableRegistry::default(),
    };

    // Create router
    let app = sheetdrop::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr.as_str()).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
