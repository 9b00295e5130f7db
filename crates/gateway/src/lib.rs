//! API Gateway Library
//!
//! This crate provides the HTTP REST API in front of the user service.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create the registration service
    let user_service = user_service_lib::build_in_memory_service(config.registration.clone());

    // Create app state
    let addr: SocketAddr = config.bind_address().parse()?;
    let state = AppState::new(user_service, config);

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
