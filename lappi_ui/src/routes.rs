//! The application route table.

use lappi_router::{CATCH_ALL, RouteEntry, RouteError, RouteTable};

use crate::views::Page;

/// Route table over the application's views.
pub type AppRouteTable = RouteTable<dyn Page>;

/// Lazily loaded view of a type from [`crate::views`].
///
/// ```ignore
/// let jobs = lazy_view!(JobsPage);
/// ```
macro_rules! lazy_view {
    ($view:ident) => {
        ::lappi_router::LazyView::<dyn $crate::views::Page>::new(stringify!($view), || async {
            ::std::sync::Arc::new($crate::views::$view)
                as ::std::sync::Arc<dyn $crate::views::Page>
        })
    };
}

/// Application routes in resolution order. The catch-all comes last.
pub fn app_entries() -> Vec<RouteEntry<dyn Page>> {
    vec![
        RouteEntry::new("/", lazy_view!(MainLayout)).with_children(vec![
            RouteEntry::new("", lazy_view!(IndexPage)),
            RouteEntry::new("collection_tree", lazy_view!(CollectionTreePage)),
            RouteEntry::new("playlists", lazy_view!(PlaylistsPage)),
            RouteEntry::new("file_manager", lazy_view!(FileManagerPage)),
            RouteEntry::new("jobs", lazy_view!(JobsPage)),
            RouteEntry::new("settings", lazy_view!(SettingsPage)),
            RouteEntry::new("commands", lazy_view!(CommandsPage)),
        ]),
        RouteEntry::new(CATCH_ALL, lazy_view!(ErrorNotFound)),
    ]
}

/// Compiled application route table.
pub fn app_routes() -> Result<AppRouteTable, RouteError> {
    RouteTable::new(app_entries())
}
