//! Which host the API client talks to.
//!
//! In production the API is served by the same host as the page. In
//! development the UI dev server and the API run separately, so the API host
//! is a fixed port either on `localhost` or on the page's hostname.

use serde::{Deserialize, Serialize};

/// Port of the API server during development.
pub const DEFAULT_DEV_PORT: u16 = 8090;

/// Location of the page the UI is served on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    protocol: String,
    host: String,
}

impl PageLocation {
    /// `protocol` may be given with or without the trailing colon (`http:`
    /// as browsers report it, or `http`). `host` is `hostname[:port]`.
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        let protocol: String = protocol.into();

        Self {
            protocol: protocol.trim_end_matches(':').to_owned(),
            host: host.into(),
        }
    }

    /// Location of the current browser window.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> Option<Self> {
        let location = web_sys::window()?.location();

        Some(Self::new(location.protocol().ok()?, location.host().ok()?))
    }

    /// Scheme without the colon.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Host including the port, if any.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Host without the port. IPv6 literals keep their brackets.
    pub fn hostname(&self) -> &str {
        if self.host.starts_with('[') {
            return match self.host.find(']') {
                Some(end) => &self.host[..=end],
                None => &self.host,
            };
        }

        match self.host.rsplit_once(':') {
            Some((hostname, port)) if port.chars().all(|c| c.is_ascii_digit()) => hostname,
            _ => &self.host,
        }
    }
}

/// Development host policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DevHost {
    /// `localhost:<port>`.
    Localhost {
        /// API server port.
        port: u16,
    },
    /// `<page hostname>:<port>`, usable when the dev server is opened from
    /// another machine.
    PageHostname {
        /// API server port.
        port: u16,
    },
}

impl Default for DevHost {
    fn default() -> Self {
        DevHost::PageHostname {
            port: DEFAULT_DEV_PORT,
        }
    }
}

impl DevHost {
    /// Development host for `page`.
    pub fn resolve(&self, page: &PageLocation) -> String {
        match self {
            DevHost::Localhost { port } => format!("localhost:{port}"),
            DevHost::PageHostname { port } => format!("{}:{port}", page.hostname()),
        }
    }
}

/// Host the API client binds to.
pub fn resolve_api_host(dev_mode: bool, dev_host: &DevHost, page: &PageLocation) -> String {
    let host = if dev_mode {
        dev_host.resolve(page)
    } else {
        page.host().to_owned()
    };

    tracing::debug!(dev_mode, page = page.host(), api = %host, "resolved api host");

    host
}

/// Base URL of the API. The development server always speaks plain HTTP.
pub fn api_base_url(dev_mode: bool, dev_host: &DevHost, page: &PageLocation) -> String {
    let protocol = if dev_mode { "http" } else { page.protocol() };

    format!("{protocol}://{}", resolve_api_host(dev_mode, dev_host, page))
}
