//! Protocol request dispatch
//!
//! One handler serves both transports (HTTP and stdio). It is a thin codec
//! over [`ToolGateway`]: `tools/call` hands the named tool and arguments to
//! the gateway and wraps whatever string payload comes back; the gateway
//! already guarantees that tool failures come back serialized, so the only
//! protocol-level errors here are malformed requests.

use crate::protocol::{
    INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR, RpcRequest, RpcResponse,
};
use serde_json::{Value, json};
use signal_tools::ToolGateway;
use tracing::{debug, warn};

/// Dispatches protocol requests onto the tool gateway
#[derive(Clone)]
pub struct RpcHandler {
    gateway: ToolGateway,
}

impl RpcHandler {
    /// Create a handler over `gateway`
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }

    /// The gateway this handler dispatches onto
    pub fn gateway(&self) -> &ToolGateway {
        &self.gateway
    }

    /// Handle one decoded request
    pub async fn handle(&self, request: RpcRequest) -> RpcResponse {
        debug!(method = %request.method, "protocol request");
        if request.jsonrpc != "2.0" {
            warn!(version = %request.jsonrpc, "unsupported protocol version");
            return RpcResponse::error(
                request.id,
                INVALID_REQUEST,
                format!("unsupported jsonrpc version '{}'", request.jsonrpc),
            );
        }
        match request.method.as_str() {
            "tools/list" => {
                let tools = self.gateway.specs();
                RpcResponse::success(request.id, json!({ "tools": tools }))
            }

            "tools/call" => {
                let Some(name) = request.params.get("name").and_then(Value::as_str) else {
                    return RpcResponse::error(
                        request.id,
                        INVALID_PARAMS,
                        "params must carry a 'name' string",
                    );
                };
                let arguments = request
                    .params
                    .get("arguments")
                    .cloned()
                    .unwrap_or_else(|| json!({}));

                let payload = self.gateway.invoke(name, arguments).await;
                RpcResponse::success(
                    request.id,
                    json!({
                        "content": [{ "type": "text", "text": payload }]
                    }),
                )
            }

            other => {
                warn!(method = other, "unknown protocol method");
                RpcResponse::error(
                    request.id,
                    METHOD_NOT_FOUND,
                    format!("unknown method '{other}'"),
                )
            }
        }
    }

    /// Handle one raw request line, decoding it first
    ///
    /// Used by the stdio transport; the HTTP transport decodes via the
    /// framework and calls [`RpcHandler::handle`] directly.
    pub async fn handle_line(&self, line: &str) -> RpcResponse {
        match serde_json::from_str::<RpcRequest>(line) {
            Ok(request) => self.handle(request).await,
            Err(e) => {
                warn!(error = %e, "malformed protocol request");
                RpcResponse::error(Value::Null, PARSE_ERROR, e.to_string())
            }
        }
    }
}
