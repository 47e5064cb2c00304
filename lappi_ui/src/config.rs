//! Server configuration.
//!
//! ```toml
//! bind_addr = "0.0.0.0:9999"
//! static_dir = "static"
//! dev_mode = false
//!
//! [dev_host]
//! kind = "page_hostname"   # or "localhost"
//! port = 8090
//! ```

use lappi_api::DevHost;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::UiError;

/// Environment variable forcing development mode on.
pub const DEV_MODE_ENV: &str = "LAPPI_UI_DEV";

/// UI server settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Listen address.
    pub bind_addr: SocketAddr,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
    /// Talk to the development API server instead of the page host.
    pub dev_mode: bool,
    /// Where the development API server lives.
    pub dev_host: DevHost,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 9999)),
            static_dir: PathBuf::from("static"),
            dev_mode: false,
            dev_host: DevHost::default(),
        }
    }
}

impl UiConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self, UiError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| UiError::Config(format!("{}: {e}", path.display())))?;

        Self::from_toml_str(&content)
            .map_err(|e| UiError::Config(format!("{}: {e}", path.display())))
    }

    /// Parse TOML config text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Turn development mode on when [`DEV_MODE_ENV`] is set to a true value.
    pub fn apply_env(&mut self) {
        if std::env::var(DEV_MODE_ENV).is_ok_and(|value| is_truthy(&value)) {
            self.dev_mode = true;
        }
    }
}

/// `1`, `true`, `yes` and `on`, case-insensitive.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
