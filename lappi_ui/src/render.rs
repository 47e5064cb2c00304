use lappi_router::outlet;

use crate::AppContext;
use crate::init_data::InitData;
use crate::routes::AppRouteTable;
use crate::views::ViewContext;

/// Result of rendering a path against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Complete HTML document.
    pub html: String,
    /// Pattern that matched.
    pub pattern: String,
    /// Whether the catch-all answered.
    pub fallback: bool,
}

/// Resolve `path`, load the matched view chain and render it.
///
/// Views load on first use only. Returns `None` when no route matches, which
/// only happens for tables without a catch-all.
pub async fn render_path(
    table: &AppRouteTable,
    app: &AppContext,
    path: &str,
) -> Option<RenderedPage> {
    let route_match = table.resolve(path)?;
    let views = route_match.load_views().await;

    let ctx = ViewContext {
        app,
        path: route_match.path(),
        params: route_match.params(),
    };

    let html = outlet::compose(
        views
            .into_iter()
            .map(|(key, view)| (key, view.render(&ctx))),
    );

    let init_data = InitData {
        api_base_url: ctx.api_base_url().map(str::to_owned),
        path: route_match.path().to_owned(),
        pattern: route_match.pattern().to_owned(),
        params: route_match.params().clone(),
    };

    Some(RenderedPage {
        html: init_data.inject(&html),
        pattern: route_match.pattern().to_owned(),
        fallback: route_match.is_fallback(),
    })
}
