//! Ecclesia Server — application entry point.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ecclesia_server::{ServerConfig, build_router};
use ecclesia_store::MemoryStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ecclesia_server=info".parse().unwrap())
                .add_directive("ecclesia_store=info".parse().unwrap()),
        )
        .json()
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(?config, "starting ecclesia server");

    let store = if config.seed_demo_data {
        MemoryStore::with_demo_data()
    } else {
        MemoryStore::new()
    };
    let app = build_router(store);

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(addr = %config.bind_addr, error = %err, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(addr = %config.bind_addr, "listening");

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server error");
    }

    tracing::info!("ecclesia server stopped");
}
