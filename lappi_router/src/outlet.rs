//! Outlet-based composition of nested views.
//!
//! A layout marks where its child renders with an outlet:
//!
//! ```html
//! <!-- @outlet-begin -->
//! placeholder
//! <!-- @outlet-end -->
//! ```
//!
//! Filling the outlet replaces everything between the markers with the child
//! HTML and tags both markers with the parent path:
//!
//! ```html
//! <!-- @outlet-begin:/ -->
//! child content
//! <!-- @outlet-end:/ -->
//! ```

/// Opening outlet marker.
pub const OUTLET_BEGIN: &str = "<!-- @outlet-begin -->";
/// Closing outlet marker.
pub const OUTLET_END: &str = "<!-- @outlet-end -->";

/// Whether `html` still has an unfilled outlet.
pub fn has_outlet(html: &str) -> bool {
    html.find(OUTLET_BEGIN)
        .is_some_and(|begin| html[begin..].contains(OUTLET_END))
}

/// Fill the first unfilled outlet in `parent` with `child`.
///
/// Returns `false` and leaves `parent` untouched when it has no outlet.
pub fn fill_outlet(path: &str, parent: &mut String, child: &str) -> bool {
    let Some(begin) = parent.find(OUTLET_BEGIN) else {
        return false;
    };

    let Some(end) = parent[begin..].find(OUTLET_END).map(|end| begin + end) else {
        return false;
    };

    let filled = format!("<!-- @outlet-begin:{path} -->{child}<!-- @outlet-end:{path} -->");

    parent.replace_range(begin..end + OUTLET_END.len(), &filled);

    true
}

/// Compose a chain of rendered layers, outermost first.
///
/// Each `(path, html)` pair is the concrete path a layer covers and its
/// rendered output. Every layer is inserted into the outlet of the one
/// before it. A layer whose parent has no outlet is dropped.
pub fn compose<I>(layers: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut html = String::new();
    let mut parent_path: Option<String> = None;

    for (path, layer_html) in layers {
        match parent_path.as_deref() {
            None => html = layer_html,
            Some(parent) => {
                if !fill_outlet(parent, &mut html, &layer_html) {
                    tracing::warn!(parent, child = %path, "layout has no outlet, child dropped");
                }
            }
        }

        parent_path = Some(path);
    }

    html
}
