use rides_api::config::AppConfig;
use rides_api::db;
use rides_api::http;
use rides_api::rides::repository::RideRepository;

use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load config
    let config = AppConfig::load()?;

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_level))
        .init();

    info!("Starting Rides API...");

    // Init DB
    let pool = db::init_pool(&config.database_url).await?;
    db::ensure_schema(&pool).await?;
    info!("Connected to database");

    // Serve
    let repository = RideRepository::new(pool);
    let app = http::router(repository);

    let listener =
        tokio::net::TcpListener::bind((config.http_host.as_str(), config.http_port)).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
