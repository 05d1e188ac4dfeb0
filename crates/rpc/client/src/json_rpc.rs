use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

pub const JSON_RPC_VERSION: &str = "2.0";

/// # Example
/// {
///   "jsonrpc": "2.0",
///   "id": 1,
///   "method": "sui_getObject",
///   "params": ["0x5", { "showContent": true }]
/// }
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Value,
}

impl JsonRpcRequest {
    pub fn new(id: u64, method: impl Into<String>, params: Value) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl<T> JsonRpcResponse<T> {
    pub fn result(result: T, id: u64) -> Self {
        Self {
            jsonrpc: JSON_RPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn into_result(self) -> Result<T, ClientError> {
        match (self.result, self.error) {
            (_, Some(error)) => Err(ClientError::Rpc {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(ClientError::InvalidResponse),
        }
    }
}

/// Options controlling which parts of an object the node returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDataOptions {
    pub show_type: bool,
    pub show_content: bool,
    pub show_owner: bool,
}

impl ObjectDataOptions {
    pub fn with_content() -> Self {
        Self {
            show_type: true,
            show_content: true,
            show_owner: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_shape() {
        let request = JsonRpcRequest::new(
            7,
            "sui_getObject",
            json!(["0x5", ObjectDataOptions::with_content()]),
        );

        assert_eq!(
            serde_json::to_value(&request).expect("serializes"),
            json!({
                "jsonrpc": "2.0",
                "id": 7,
                "method": "sui_getObject",
                "params": ["0x5", { "showType": true, "showContent": true, "showOwner": false }]
            })
        );
    }

    #[test]
    fn test_result_and_error() {
        let ok: JsonRpcResponse<u64> =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1, "result": 9 }))
                .expect("deserializes");
        assert_eq!(ok.into_result().expect("result"), 9);

        let failed: JsonRpcResponse<u64> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32602, "message": "Invalid params" }
        }))
        .expect("deserializes");
        assert!(matches!(
            failed.into_result(),
            Err(ClientError::Rpc { code: -32602, .. })
        ));

        let empty: JsonRpcResponse<u64> =
            serde_json::from_value(json!({ "jsonrpc": "2.0", "id": 1 })).expect("deserializes");
        assert!(matches!(
            empty.into_result(),
            Err(ClientError::InvalidResponse)
        ));
    }
}
