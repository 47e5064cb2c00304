//! Declarative route table for the Lappi UI.
//!
//! Routes are declared once as an ordered tree of [`RouteEntry`] values and
//! compiled into a [`RouteTable`]. Resolution walks the flattened table in
//! declaration order and the first matching pattern wins, so the catch-all
//! entry has to come last.

mod entry;
mod error;
mod matched_prefix;
pub mod outlet;
mod pattern;
mod table;

pub use entry::{LazyView, RouteEntry, ViewFuture, ViewLoader};
pub use error::RouteError;
pub use matched_prefix::matched_prefix;
pub use table::{RouteLayer, RouteMatch, RouteTable};

/// Catch-all pattern resolving every path no other entry matched.
pub const CATCH_ALL: &str = "/{*catch_all}";

/// Join a parent route path with a child path.
///
/// Child paths may be written relative (`playlists`) or absolute
/// (`/playlists`); an empty child stands for the parent itself. Empty
/// segments from doubled or trailing slashes are dropped, so the result is
/// always `/` or `/seg/...` without a trailing slash.
pub fn combine_paths(parent: &str, child: &str) -> String {
    let segments: Vec<&str> = parent
        .split('/')
        .chain(child.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    format!("/{}", segments.join("/"))
}

/// Strip query and fragment, drop a trailing slash and guarantee a leading one.
pub fn normalize_path(path: &str) -> String {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');

    if path.is_empty() {
        String::from("/")
    } else if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Whether the last segment of `pattern` is a catch-all parameter.
pub fn is_catch_all(pattern: &str) -> bool {
    pattern
        .rsplit('/')
        .next()
        .is_some_and(|segment| segment.starts_with("{*") && segment.ends_with('}'))
}
