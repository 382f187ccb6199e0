//! YAML codec (library default formatting)

use crate::types::ApiResponse;

pub(super) fn decode(input: &[u8]) -> Result<ApiResponse, String> {
    serde_yaml::from_slice(input).map_err(|e| e.to_string())
}

pub(super) fn encode(response: &ApiResponse) -> Result<Vec<u8>, String> {
    serde_yaml::to_string(response)
        .map(String::into_bytes)
        .map_err(|e| e.to_string())
}
