//! Remote tool-invocation endpoint
//!
//! Exposes the tool gateway over a JSON-RPC 2.0 protocol, reachable over
//! HTTP (`POST /rpc`) or newline-delimited stdio. Both transports are thin
//! codecs over the same [`RpcHandler`]; there is no second copy of the
//! invocation logic.

pub mod handler;
pub mod http;
pub mod protocol;
pub mod stdio;

pub use handler::RpcHandler;
pub use http::{AppState, create_router};
pub use protocol::{RpcError, RpcRequest, RpcResponse};
