//! Flattened, ordered route table and its resolution.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::pattern::RoutePattern;
use crate::{LazyView, RouteEntry, RouteError, combine_paths, is_catch_all, matched_prefix, normalize_path};

/// One view of a resolved chain together with the full pattern of the entry
/// that declared it.
pub struct RouteLayer<V: ?Sized> {
    pattern: String,
    view: LazyView<V>,
}

impl<V: ?Sized> RouteLayer<V> {
    /// Full pattern of the declaring entry.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The lazily loaded view.
    pub fn view(&self) -> &LazyView<V> {
        &self.view
    }
}

impl<V: ?Sized> Clone for RouteLayer<V> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            view: self.view.clone(),
        }
    }
}

impl<V: ?Sized> fmt::Debug for RouteLayer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteLayer")
            .field("pattern", &self.pattern)
            .field("view", &self.view.name())
            .finish()
    }
}

/// A leaf of the entry tree with the chain of views leading to it.
struct FlatRoute<V: ?Sized> {
    pattern: RoutePattern,
    layers: Vec<RouteLayer<V>>,
}

impl<V: ?Sized> fmt::Debug for FlatRoute<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatRoute")
            .field("pattern", &self.pattern)
            .field("layers", &self.layers)
            .finish()
    }
}

/// Immutable, ordered mapping from path patterns to view chains.
///
/// Built once from the declared [`RouteEntry`] tree. Nested entries are
/// flattened depth-first: children come before their parent, so a child with
/// an empty path takes precedence over the parent's bare layout.
pub struct RouteTable<V: ?Sized> {
    routes: Vec<FlatRoute<V>>,
}

impl<V: ?Sized> RouteTable<V> {
    /// Compile and validate `entries`.
    ///
    /// # Errors
    ///
    /// * [`RouteError::CatchAllNotLast`] if a catch-all entry is followed by others
    /// * [`RouteError::NestedCatchAll`] if a catch-all appears below the top level
    /// * [`RouteError::InvalidPattern`] if the matcher rejects a pattern
    /// * [`RouteError::EmptyEntry`] if an entry has neither a view nor children
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, RouteError> {
        let last = entries.len().saturating_sub(1);

        if let Some(entry) = entries
            .iter()
            .enumerate()
            .find(|(i, entry)| *i != last && is_catch_all(entry.path()))
            .map(|(_, entry)| entry)
        {
            return Err(RouteError::CatchAllNotLast {
                pattern: entry.path().to_owned(),
            });
        }

        let mut routes = Vec::new();

        for entry in entries.iter() {
            Self::flatten(entry, "", &[], 0, &mut routes)?;
        }

        tracing::debug!(routes = routes.len(), "route table compiled");

        Ok(Self { routes })
    }

    fn flatten(
        entry: &RouteEntry<V>,
        parent_path: &str,
        parent_layers: &[RouteLayer<V>],
        depth: usize,
        routes: &mut Vec<FlatRoute<V>>,
    ) -> Result<(), RouteError> {
        let full_path = combine_paths(parent_path, entry.path());

        if depth > 0 && is_catch_all(&full_path) {
            return Err(RouteError::NestedCatchAll { pattern: full_path });
        }

        let mut layers = parent_layers.to_vec();

        if let Some(view) = entry.view() {
            layers.push(RouteLayer {
                pattern: full_path.clone(),
                view: view.clone(),
            });
        }

        let first_child = routes.len();

        for child in entry.children() {
            Self::flatten(child, &full_path, &layers, depth + 1, routes)?;
        }

        let covered_by_child = routes[first_child..]
            .iter()
            .any(|route| route.pattern.as_str() == full_path);

        if covered_by_child {
            return Ok(());
        }

        if entry.view().is_none() {
            if entry.children().is_empty() {
                return Err(RouteError::EmptyEntry { pattern: full_path });
            }

            return Ok(());
        }

        routes.push(FlatRoute {
            pattern: RoutePattern::parse(&full_path)?,
            layers,
        });

        Ok(())
    }

    /// Resolve `path` to the first matching route in declaration order.
    ///
    /// Returns `None` only when nothing matched and the table has no
    /// catch-all entry.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let path = normalize_path(path);

        for route in self.routes.iter() {
            if let Some(params) = route.pattern.at(&path) {
                tracing::debug!(path = %path, pattern = route.pattern.as_str(), "route matched");

                return Some(RouteMatch {
                    path,
                    params,
                    route,
                });
            }
        }

        tracing::debug!(path = %path, "no route matched");

        None
    }

    /// Flattened patterns in resolution order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.as_str())
    }

    /// Whether the last route is a catch-all.
    pub fn has_fallback(&self) -> bool {
        self.routes
            .last()
            .is_some_and(|route| route.pattern.is_catch_all())
    }

    /// Number of flattened routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table has no routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V: ?Sized> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes)
            .finish()
    }
}

/// Result of resolving a path against a [`RouteTable`].
pub struct RouteMatch<'a, V: ?Sized> {
    path: String,
    params: HashMap<String, String>,
    route: &'a FlatRoute<V>,
}

impl<V: ?Sized> RouteMatch<'_, V> {
    /// Normalised path that was resolved.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Full pattern of the matched route.
    pub fn pattern(&self) -> &str {
        self.route.pattern.as_str()
    }

    /// Parameters captured from the path.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    /// Whether the catch-all entry produced this match.
    pub fn is_fallback(&self) -> bool {
        self.route.pattern.is_catch_all()
    }

    /// View chain, outermost layout first.
    pub fn layers(&self) -> &[RouteLayer<V>] {
        &self.route.layers
    }

    /// Names of the views in the chain, outermost first.
    pub fn view_names(&self) -> Vec<&'static str> {
        self.route
            .layers
            .iter()
            .map(|layer| layer.view.name())
            .collect()
    }

    /// Load every view of the chain, outermost first, keyed by the concrete
    /// path each layer covers.
    pub async fn load_views(&self) -> Vec<(String, Arc<V>)> {
        let mut views = Vec::with_capacity(self.route.layers.len());

        for layer in self.route.layers.iter() {
            let key = matched_prefix(&layer.pattern, &self.path);
            views.push((key, layer.view.load().await));
        }

        views
    }
}

impl<V: ?Sized> fmt::Debug for RouteMatch<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("path", &self.path)
            .field("pattern", &self.pattern())
            .field("params", &self.params)
            .finish()
    }
}
