//! Values shared with views while a page renders.

use lappi_api::{LappiApi, RpcClient};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type-keyed bag of shared values, one per type.
///
/// The server builds a fresh context per request, so nothing registered while
/// rendering one page is visible to another.
#[derive(Default)]
pub struct AppContext {
    values: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl AppContext {
    /// Empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, returning the one it replaces.
    pub fn provide<T: Any + Send + Sync>(&mut self, value: T) -> Option<T> {
        self.values
            .insert(TypeId::of::<T>(), Box::new(value))
            .and_then(|previous| previous.downcast::<T>().ok())
            .map(|previous| *previous)
    }

    /// Value stored for `T`.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// Whether a value is stored for `T`.
    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }

    /// Collection API handle published by the registrar.
    pub fn api(&self) -> Option<&LappiApi> {
        self.get::<LappiApi>()
    }

    /// Base RPC client published by the registrar.
    pub fn rpc_client(&self) -> Option<&Arc<dyn RpcClient>> {
        self.get::<Arc<dyn RpcClient>>()
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("values", &self.values.len())
            .field("api", &self.api())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Theme(&'static str);

    #[test]
    fn test_provide_and_get() {
        let mut ctx = AppContext::new();

        assert!(ctx.is_empty());
        assert_eq!(ctx.provide(Theme("dark")), None);
        assert_eq!(ctx.get::<Theme>(), Some(&Theme("dark")));
        assert!(ctx.contains::<Theme>());
        assert!(!ctx.contains::<String>());
    }

    #[test]
    fn test_provide_replaces() {
        let mut ctx = AppContext::new();

        ctx.provide(Theme("dark"));

        assert_eq!(ctx.provide(Theme("light")), Some(Theme("dark")));
        assert_eq!(ctx.get::<Theme>(), Some(&Theme("light")));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut ctx = AppContext::new();

        ctx.provide(Theme("dark"));
        ctx.provide(7_u32);
        ctx.clear();

        assert!(ctx.is_empty());
        assert_eq!(ctx.get::<u32>(), None);
        assert!(ctx.api().is_none());
    }
}
