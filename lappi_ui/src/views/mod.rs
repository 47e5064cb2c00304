//! Server-rendered views.
//!
//! Each view renders to an HTML string. Layouts leave an outlet
//! ([`lappi_router::outlet::OUTLET_BEGIN`] .. [`lappi_router::outlet::OUTLET_END`])
//! where the matched child is inserted.

use lappi_router::outlet::{OUTLET_BEGIN, OUTLET_END};
use std::collections::HashMap;

use crate::AppContext;

mod layout;
mod not_found;
mod pages;

pub use layout::MainLayout;
pub use not_found::ErrorNotFound;
pub use pages::{
    CollectionTreePage, CommandsPage, FileManagerPage, IndexPage, JobsPage, PlaylistsPage,
    SettingsPage,
};

/// A view module.
pub trait Page: Send + Sync {
    /// Render to HTML.
    fn render(&self, ctx: &ViewContext<'_>) -> String;
}

/// What a view sees while rendering.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Shared values, including the registered API client.
    pub app: &'a AppContext,
    /// Normalised request path.
    pub path: &'a str,
    /// Captured route parameters.
    pub params: &'a HashMap<String, String>,
}

impl ViewContext<'_> {
    /// Base URL of the registered API, if any.
    pub fn api_base_url(&self) -> Option<&str> {
        self.app.api().map(|api| api.base_url())
    }
}

/// Empty outlet for a layout to place its child.
pub fn outlet() -> String {
    format!("{OUTLET_BEGIN}{OUTLET_END}")
}

/// Escape text for use in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Navigation link; the one for `current` (any case) is marked active.
pub fn nav_link(href: &str, text: &str, current: &str) -> String {
    let active = if href.eq_ignore_ascii_case(current) {
        r#" class="active" aria-current="page""#
    } else {
        ""
    };

    format!(
        r#"<a href="{}"{active} data-nav>{}</a>"#,
        escape_html(href),
        escape_html(text)
    )
}
