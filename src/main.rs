use anyhow::Result;
use route_simulator::{config::AppConfig, registry::InMemoryRegistry, server, utils};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load();
    let registry = Arc::new(InMemoryRegistry::with_default_pools());

    tracing::info!(
        %config.bind_addr,
        config.port,
        pools = registry.len(),
        "[INIT] route-simulator starting"
    );

    warp::serve(server::routes(registry))
        .run((config.bind_addr, config.port))
        .await;

    Ok(())
}
