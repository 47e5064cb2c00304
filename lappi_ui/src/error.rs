use lappi_router::RouteError;
use thiserror::Error;

/// Failures of the UI shell.
#[derive(Debug, Error)]
pub enum UiError {
    /// Config file could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// An API client is already registered in this context.
    #[error("an api client is already registered")]
    AlreadyRegistered,
    /// The route table is malformed.
    #[error(transparent)]
    Route(#[from] RouteError),
    /// Socket or file I/O.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
