//! Request and response bodies of the catalog API.
//!
//! Every call is a POST of `{"action": ..., "params": {...}}` to the same
//! endpoint, answered by `{"result": ...}`.

use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// Tagged request body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "params", rename_all = "snake_case")]
pub enum RpcRequest<'a> {
    GetIds { offset: usize, limit: usize },
    GetItems { ids: &'a [ProductId] },
}

impl RpcRequest<'_> {
    pub fn action(&self) -> &'static str {
        match self {
            RpcRequest::GetIds { .. } => "get_ids",
            RpcRequest::GetItems { .. } => "get_items",
        }
    }
}

/// Response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: T,
}
