use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::{ApiError, RpcClient, RpcFuture, decode_response};

/// [`RpcClient`] speaking the `make_request` HTTP protocol over `http` or
/// `https`.
///
/// Every call is a `POST {base}/make_request?key=<method>` with the JSON
/// parameters as body. Construction does not touch the network; an
/// unreachable server shows up as [`ApiError::Connection`] on the first call.
#[derive(Debug, Clone)]
pub struct HttpRpcClient {
    base_url: String,
    client: Client,
}

impl HttpRpcClient {
    /// Client bound to `base_url`, e.g. `http://localhost:8090`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Client bound to `base_url` sharing an existing connection pool.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url: String = base_url.into();

        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        }
    }

    async fn post(&self, method: &str, params: Value) -> Result<Value, ApiError> {
        let url = format!("{}/make_request?key={method}", self.base_url);
        let body =
            serde_json::to_vec(&params).map_err(|e| ApiError::Serialization(e.to_string()))?;

        tracing::debug!(method, url = %url, "sending remote request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ApiError::InvalidUrl(format!("{url}: {e}"))
                } else {
                    ApiError::Connection(e.to_string())
                }
            })?;

        let status = response.status();

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Connection(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(method, status = status.as_u16(), "remote request failed");

            return Err(ApiError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        decode_response(&body)
    }
}

impl RpcClient for HttpRpcClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn send_request<'a>(&'a self, method: &'a str, params: Value) -> RpcFuture<'a> {
        Box::pin(self.post(method, params))
    }
}
