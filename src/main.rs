use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use blogd::{Config, Error, MemStore, Server, routes};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = Config::from_env()?;
    info!(addr = %config.addr, keying = ?config.keying, "starting blogd");

    let store = Arc::new(MemStore::new(config.keying));
    let router = routes::router();

    Server::bind(config.addr).serve(router, store).await
}

/// Honors `RUST_LOG`, defaults to `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
