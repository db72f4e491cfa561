//! Inspection API entry point

use anyhow::Context;
use shared::logging;
use tokio::signal;

use inspection_api::{
    DefectStore, InMemoryDefectStore, InspectionServer, RedisDefectStore, ServerConfig, StoreKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load();

    logging::init_service("inspection-api");
    let _log_guard =
        logging::init_tracing(&config.logging()?).context("failed to initialize logging")?;
    logging::log_startup("Manufacturing Inspection API");

    let addr = config.bind_address()?;

    match config.store {
        StoreKind::Redis => {
            let url = config.redis_url();
            let store = RedisDefectStore::connect(&url, config.redis_key_namespace.clone())
                .await
                .inspect_err(|e| logging::log_error("Redis connection", e))
                .with_context(|| format!("failed to connect to {url}"))?;
            logging::log_success(&format!("Connected to Redis at {url}"));
            serve(store, addr).await?;
            logging::log_shutdown("Redis connection closed");
        }
        StoreKind::Memory => {
            logging::log_success("Using in-memory store; records are lost on exit");
            serve(InMemoryDefectStore::new(), addr).await?;
        }
    }

    Ok(())
}

async fn serve<S>(store: S, addr: std::net::SocketAddr) -> anyhow::Result<()>
where
    S: DefectStore + 'static,
{
    let server = InspectionServer::new(store);
    server.run(addr, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown("Received Ctrl+C signal"),
        Err(err) => logging::log_error("Signal handling", &err),
    }
}
