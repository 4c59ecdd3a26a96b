pub mod oauth;
pub mod posts;
pub mod resolver;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::graph::UpstreamError;
use crate::error::{AppError, Result};

/// Decodes an upstream JSON payload into a typed record. A payload that
/// doesn't match the expected shape is an upstream failure, not a caller
/// error.
pub(crate) fn decode<T: DeserializeOwned>(payload: Value, what: &str) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| {
        AppError::Upstream(UpstreamError {
            status: None,
            body: format!("unexpected {what} payload: {e}"),
        })
    })
}
