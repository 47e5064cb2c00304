use matchit::Router;
use std::collections::HashMap;
use std::fmt;

use crate::{RouteError, is_catch_all};

/// One compiled path pattern.
///
/// Each flattened route owns its own single-pattern matcher so that the
/// table can be walked in declaration order instead of by matcher priority.
/// Literal text matches ASCII case-insensitively; captured values keep the
/// case of the request.
pub(crate) struct RoutePattern {
    source: String,
    catch_all: bool,
    router: Router<()>,
}

impl RoutePattern {
    pub(crate) fn parse(pattern: &str) -> Result<Self, RouteError> {
        let mut router = Router::new();
        let catch_all = is_catch_all(pattern);
        let folded = fold_literals(pattern);

        Self::insert(&mut router, &folded, pattern)?;

        if catch_all {
            // matchit catch-alls need a non-empty remainder; the bare prefix
            // has to match as well.
            let prefix = folded
                .rsplit_once('/')
                .map(|(prefix, _)| prefix)
                .unwrap_or_default();
            let prefix = if prefix.is_empty() { "/" } else { prefix };

            Self::insert(&mut router, prefix, pattern)?;
        }

        Ok(Self {
            source: pattern.to_owned(),
            catch_all,
            router,
        })
    }

    fn insert(router: &mut Router<()>, route: &str, pattern: &str) -> Result<(), RouteError> {
        router
            .insert(route, ())
            .map_err(|e| RouteError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            })
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn is_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Captured parameters when `path` matches.
    pub(crate) fn at(&self, path: &str) -> Option<HashMap<String, String>> {
        let folded = path.to_ascii_lowercase();
        let route_match = self.router.at(&folded).ok()?;

        Some(
            route_match
                .params
                .iter()
                .map(|(k, v)| (k.to_owned(), unfold(path, &folded, v)))
                .collect(),
        )
    }
}

/// Lowercase everything outside `{...}` parameter names.
fn fold_literals(pattern: &str) -> String {
    let mut depth = 0_usize;

    pattern
        .chars()
        .map(|c| {
            match c {
                '{' => depth += 1,
                '}' => depth = depth.saturating_sub(1),
                _ => {}
            }

            if depth == 0 { c.to_ascii_lowercase() } else { c }
        })
        .collect()
}

/// The slice of `path` at the position `value` occupies in `folded`.
///
/// ASCII folding keeps byte offsets, so the ranges line up.
fn unfold(path: &str, folded: &str, value: &str) -> String {
    let start = (value.as_ptr() as usize).wrapping_sub(folded.as_ptr() as usize);

    start
        .checked_add(value.len())
        .and_then(|end| path.get(start..end))
        .unwrap_or(value)
        .to_owned()
}

impl fmt::Debug for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePattern")
            .field("source", &self.source)
            .field("catch_all", &self.catch_all)
            .finish()
    }
}
