use thiserror::Error;

/// Failure of a remote call.
///
/// Convenience calls built on top of [`crate::RpcClient`] pass these through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server could not be reached or the transfer broke off.
    #[error("connection error: {0}")]
    Connection(String),

    /// The server answered with a non-success status.
    #[error("server returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, lossily decoded.
        body: String,
    },

    /// Request parameters could not be encoded.
    #[error("failed to encode request: {0}")]
    Serialization(String),

    /// Response did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Deserialization(String),

    /// The remote handler reported an error.
    #[error("remote error: {0}")]
    Remote(String),

    /// Envelope carried neither data nor an error.
    #[error("empty response")]
    EmptyResponse,

    /// The request URL could not be built.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}
