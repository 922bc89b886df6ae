//! HTTP transport for the tool-invocation protocol

use crate::handler::RpcHandler;
use crate::protocol::RpcRequest;
use axum::{
    Router,
    extract::State,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Protocol handler shared across requests
    pub handler: Arc<RpcHandler>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Number of registered tools
    pub tool_count: usize,
}

/// POST /rpc - handle one protocol request
async fn rpc(
    State(state): State<AppState>,
    Json(request): Json<RpcRequest>,
) -> Json<crate::protocol::RpcResponse> {
    Json(state.handler.handle(request).await)
}

/// GET /health - liveness check
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        tool_count: state.handler.gateway().specs().len(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rpc", post(rpc))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind `addr` and serve the protocol endpoint until the process exits
pub async fn serve(handler: Arc<RpcHandler>, addr: SocketAddr) -> std::io::Result<()> {
    let app = create_router(AppState { handler });
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "tool endpoint listening");
    axum::serve(listener, app).await
}
