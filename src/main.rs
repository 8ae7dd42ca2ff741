use std::sync::Arc;

use escore::catalog::{CatalogClient, CatalogHttpClient};
use escore::config::AppConfig;
use escore::routes::router;
use escore::state::AppState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "escore=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let catalog = CatalogHttpClient::new(&config.catalog)?;
    info!("catalog endpoint: {}", catalog.url());
    let catalog: Arc<dyn CatalogClient> = Arc::new(catalog);

    let state = AppState {
        catalog,
        site: Arc::new(config.site),
        prefetch_courses: config.prefetch_courses,
    };

    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
