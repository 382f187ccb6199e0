//! JSON codec (pretty-printed, 2-space indent)

use crate::types::ApiResponse;

pub(super) fn decode(input: &[u8]) -> Result<ApiResponse, String> {
    serde_json::from_slice(input).map_err(|e| e.to_string())
}

pub(super) fn encode(response: &ApiResponse) -> Result<Vec<u8>, String> {
    serde_json::to_vec_pretty(response).map_err(|e| e.to_string())
}
