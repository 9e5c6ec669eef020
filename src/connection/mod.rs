pub mod error;
pub mod http;
#[cfg(test)]
pub mod mock;

use self::error::ApiError;
use serde_json::Value;

/// Request capability the TestRail adapter is built on. `uri` is relative to
/// the API root, e.g. `get_run/12`.
pub trait ApiTransport {
    fn send_get(&self, uri: &str) -> Result<Value, ApiError>;
    fn send_post(&self, uri: &str, data: &Value) -> Result<Value, ApiError>;
}
