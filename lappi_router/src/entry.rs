use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, OnceLock};

/// Future produced by a [`ViewLoader`].
pub type ViewFuture<V> = Pin<Box<dyn Future<Output = Arc<V>> + Send>>;

/// Zero-argument function producing a view module.
pub type ViewLoader<V> = Arc<dyn Fn() -> ViewFuture<V> + Send + Sync>;

/// A view whose module is produced on first activation and reused afterwards.
///
/// Clones share the same cell, so a view loaded through one route layer is
/// loaded for every layer that references it.
pub struct LazyView<V: ?Sized> {
    name: &'static str,
    loader: ViewLoader<V>,
    loaded: Arc<OnceLock<Arc<V>>>,
}

impl<V: ?Sized> LazyView<V> {
    /// Wrap an async loader.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use lappi_router::LazyView;
    ///
    /// let view: LazyView<str> = LazyView::new("greeting", || async { Arc::from("hello") });
    /// assert!(!view.is_loaded());
    /// ```
    pub fn new<F, Fut>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Arc<V>> + Send + 'static,
    {
        let loader: ViewLoader<V> = Arc::new(move || Box::pin(loader()));

        Self {
            name,
            loader,
            loaded: Arc::new(OnceLock::new()),
        }
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the loader already ran.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    /// Return the view module, running the loader on first use.
    pub async fn load(&self) -> Arc<V> {
        if let Some(view) = self.loaded.get() {
            return Arc::clone(view);
        }

        tracing::debug!(view = self.name, "loading view module");

        let view = (self.loader)().await;

        // Two concurrent first activations may both run the loader; the first
        // one stored wins.
        Arc::clone(self.loaded.get_or_init(|| view))
    }
}

impl<V: ?Sized> Clone for LazyView<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            loader: Arc::clone(&self.loader),
            loaded: Arc::clone(&self.loaded),
        }
    }
}

impl<V: ?Sized> fmt::Debug for LazyView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("name", &self.name)
            .field("loader", &"<ViewLoader>")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// Declarative mapping from a path pattern to a view, with optional children
/// rendered inside it.
pub struct RouteEntry<V: ?Sized> {
    path: String,
    view: Option<LazyView<V>>,
    children: Vec<RouteEntry<V>>,
}

impl<V: ?Sized> RouteEntry<V> {
    /// Entry rendering `view` at `path`.
    pub fn new(path: impl Into<String>, view: LazyView<V>) -> Self {
        Self {
            path: path.into(),
            view: Some(view),
            children: Vec::new(),
        }
    }

    /// Entry without a view of its own, only grouping children under `path`.
    pub fn group(path: impl Into<String>, children: Vec<RouteEntry<V>>) -> Self {
        Self {
            path: path.into(),
            view: None,
            children,
        }
    }

    /// Nest `children` under this entry; they render inside its outlet.
    pub fn with_children(mut self, children: Vec<RouteEntry<V>>) -> Self {
        self.children = children;
        self
    }

    /// Path pattern relative to the parent entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// View rendered by this entry, if any.
    pub fn view(&self) -> Option<&LazyView<V>> {
        self.view.as_ref()
    }

    /// Nested entries, in declaration order.
    pub fn children(&self) -> &[RouteEntry<V>] {
        &self.children
    }
}

impl<V: ?Sized> fmt::Debug for RouteEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("view", &self.view)
            .field("children", &self.children)
            .finish()
    }
}
