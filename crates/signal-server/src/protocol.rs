//! JSON-RPC 2.0 wire types
//!
//! The remote tool-invocation protocol is JSON-RPC 2.0: a request names a
//! method (`tools/list` or `tools/call`) and carries parameters; the
//! response carries either a result or a well-formed error object. Errors
//! are always protocol-level objects, never bare transport failures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parse error: the request was not valid JSON
pub const PARSE_ERROR: i64 = -32700;
/// The request object was malformed
pub const INVALID_REQUEST: i64 = -32600;
/// The named method does not exist
pub const METHOD_NOT_FOUND: i64 = -32601;
/// The method parameters were invalid
pub const INVALID_PARAMS: i64 = -32602;

/// One JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,

    /// Request ID echoed back in the response
    #[serde(default)]
    pub id: Value,

    /// Method name
    pub method: String,

    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

/// One JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,

    /// ID of the request this responds to
    pub id: Value,

    /// Result payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error object, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    /// Error code
    pub code: i64,

    /// Human-readable message
    pub message: String,
}

impl RpcResponse {
    /// Successful response for request `id`
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Error response for request `id`
    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_decodes_with_defaults() {
        let request: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc": "2.0", "method": "tools/list"}"#).unwrap();
        assert_eq!(request.method, "tools/list");
        assert_eq!(request.id, Value::Null);
        assert_eq!(request.params, Value::Null);
    }

    #[test]
    fn test_error_response_omits_result() {
        let response = RpcResponse::error(json!(1), METHOD_NOT_FOUND, "no such method");
        let encoded = serde_json::to_value(&response).unwrap();
        assert_eq!(encoded["error"]["code"], METHOD_NOT_FOUND);
        assert!(encoded.get("result").is_none());
    }

    #[test]
    fn test_success_response_omits_error() {
        let response = RpcResponse::success(json!(1), json!({"tools": []}));
        let encoded = serde_json::to_value(&response).unwrap();
        assert!(encoded.get("error").is_none());
        assert_eq!(encoded["result"]["tools"], json!([]));
    }
}
