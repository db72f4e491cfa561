//! Main server implementation
//!
//! `InspectionServer` owns the injected store (through `InspectionService`),
//! builds the axum router and runs it until shutdown.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use shared::logging;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::services::InspectionService;
use crate::traits::DefectStore;
use crate::web::handlers::{bulk, health, single};

pub const SINGLE_PREFIX: &str = "/api/v1/inspection/single";
pub const BULK_PREFIX: &str = "/api/v1/inspection/bulk";

/// Inspection API server with dependency injection
pub struct InspectionServer<S> {
    service: InspectionService<S>,
}

impl<S> InspectionServer<S>
where
    S: DefectStore + 'static,
{
    /// Create a new server around an already connected store
    pub fn new(store: S) -> Self {
        Self {
            service: InspectionService::new(store),
        }
    }

    /// Build the axum router with all routes
    pub fn build_router(&self) -> Router {
        let single_routes = Router::new()
            .route("/check", post(single::check_single_item::<S>))
            .route("/record", post(single::create_or_update_record::<S>));

        let bulk_routes = Router::new()
            .route("/check", post(bulk::check_bulk_items::<S>))
            .route("/records", post(bulk::create_or_update_bulk_records::<S>));

        Router::new()
            .route("/", get(health::health_check))
            .nest(SINGLE_PREFIX, single_routes)
            .nest(BULK_PREFIX, bulk_routes)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
            .with_state(self.service.clone())
    }

    /// Serve on `addr` until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> ApiResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::ServerStartup(format!("Failed to bind to {addr}: {e}")))?;

        logging::log_startup(&format!("Inspection API listening on http://{addr}"));

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ApiError::ServerStartup(format!("Server error: {e}")))?;

        logging::log_success("Inspection API stopped gracefully");
        Ok(())
    }
}
