//! Client registration at boot.

use lappi_api::host::api_base_url;
use lappi_api::{DevHost, LappiApi, PageLocation, RpcClient};
use std::sync::Arc;

use crate::{AppContext, UiConfig, UiError};

/// Base URL the registered client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(pub String);

/// Builds the API client for the running deployment and publishes it into an
/// [`AppContext`].
///
/// Publishes three values: [`LappiApi`], the underlying
/// `Arc<dyn RpcClient>` and its [`ApiBaseUrl`].
#[derive(Debug, Clone, Default)]
pub struct ClientRegistrar {
    dev_mode: bool,
    dev_host: DevHost,
}

impl ClientRegistrar {
    /// Registrar with an explicit host policy.
    pub fn new(dev_mode: bool, dev_host: DevHost) -> Self {
        Self { dev_mode, dev_host }
    }

    /// Registrar following the server config.
    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(config.dev_mode, config.dev_host)
    }

    /// Whether clients are bound to the development host.
    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    /// Base URL of the API for a page served at `page`.
    pub fn base_url(&self, page: &PageLocation) -> String {
        api_base_url(self.dev_mode, &self.dev_host, page)
    }

    /// Build an HTTP client for `page` and register it.
    ///
    /// Does not contact the server; an unreachable host fails on the first
    /// remote call.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn register(
        &self,
        ctx: &mut AppContext,
        page: &PageLocation,
    ) -> Result<LappiApi, UiError> {
        let client = lappi_api::HttpRpcClient::new(self.base_url(page));

        self.register_client(ctx, Arc::new(client))
    }

    /// Register an already constructed client.
    pub fn register_client(
        &self,
        ctx: &mut AppContext,
        client: Arc<dyn RpcClient>,
    ) -> Result<LappiApi, UiError> {
        if ctx.contains::<LappiApi>() {
            return Err(UiError::AlreadyRegistered);
        }

        let api = LappiApi::new(Arc::clone(&client));

        tracing::debug!(
            dev_mode = self.dev_mode,
            base_url = client.base_url(),
            "api client registered"
        );

        ctx.provide(ApiBaseUrl(client.base_url().to_owned()));
        ctx.provide(client);
        ctx.provide(api.clone());

        Ok(api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        let page = PageLocation::new("https:", "media.home:443");

        assert_eq!(
            ClientRegistrar::default().base_url(&page),
            "https://media.home:443"
        );
        assert_eq!(
            ClientRegistrar::new(true, DevHost::Localhost { port: 8090 }).base_url(&page),
            "http://localhost:8090"
        );
    }

    #[test]
    fn test_from_config() {
        let config = UiConfig {
            dev_mode: true,
            ..UiConfig::default()
        };

        let registrar = ClientRegistrar::from_config(&config);

        assert!(registrar.dev_mode());
        assert_eq!(
            registrar.base_url(&PageLocation::new("http", "lappi.lan:9999")),
            "http://lappi.lan:8090"
        );
    }
}
