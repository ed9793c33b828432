//! API Gateway Library
//!
//! This crate provides the HTTP REST API over the in-process record service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use record_service_lib::Services;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
///
/// The store starts empty and lives as long as the server.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let services = Services::in_memory();
    let addr: SocketAddr = config.server.addr().parse()?;

    // Build router
    let state = AppState::new(&services, config);
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
