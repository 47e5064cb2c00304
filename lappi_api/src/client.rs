use futures_util::future::BoxFuture;
use serde::Deserialize;
use serde_json::Value;

use crate::ApiError;

/// Future returned by [`RpcClient::send_request`].
pub type RpcFuture<'a> = BoxFuture<'a, Result<Value, ApiError>>;

/// Generic call interface of the remote API.
///
/// Implemented once per transport; everything else composes on top of it.
pub trait RpcClient: Send + Sync {
    /// Base address requests are sent to, e.g. `http://localhost:8090`.
    fn base_url(&self) -> &str;

    /// Invoke `method` with a JSON parameter mapping.
    fn send_request<'a>(&'a self, method: &'a str, params: Value) -> RpcFuture<'a>;

    /// Servable URL of a file path exposed by the API server. Pure, no I/O.
    fn get_file_url(&self, path: &str) -> String {
        format!(
            "{}/file/{}",
            self.base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Option<Value>,
    error: Option<RemoteError>,
}

#[derive(Deserialize)]
struct RemoteError {
    message: String,
}

/// Unwrap a `{ "data": ... }` / `{ "error": { "message": ... } }` envelope.
///
/// `{ "data": { "empty_response": true } }` stands for "no value" and comes
/// back as JSON `null`.
pub fn decode_response(body: &[u8]) -> Result<Value, ApiError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;

    match (envelope.data, envelope.error) {
        (Some(data), _) if is_empty_marker(&data) => Ok(Value::Null),
        (Some(data), _) => Ok(data),
        (None, Some(error)) => Err(ApiError::Remote(error.message)),
        (None, None) => Err(ApiError::EmptyResponse),
    }
}

fn is_empty_marker(data: &Value) -> bool {
    data.as_object().is_some_and(|object| {
        object.len() == 1 && object.get("empty_response") == Some(&Value::Bool(true))
    })
}
