//! Lappi UI shell.
//!
//! Serves the Lappi media manager front end: every request path is resolved
//! against [`routes::app_routes`], the matched chain of lazily loaded views is
//! rendered into its layout, and the page is handed to the browser together
//! with the API base URL the [`ClientRegistrar`] chose for it.

mod boot;
pub mod config;
mod context;
mod error;
pub mod init_data;
mod render;
pub mod routes;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod views;

pub use boot::{ApiBaseUrl, ClientRegistrar};
pub use config::UiConfig;
pub use context::AppContext;
pub use error::UiError;
pub use render::{RenderedPage, render_path};
