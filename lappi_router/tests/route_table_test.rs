#![allow(missing_docs)]

use lappi_router::{CATCH_ALL, LazyView, RouteEntry, RouteError, RouteTable, outlet};
use std::sync::Arc;

fn view(name: &'static str, html: &'static str) -> LazyView<str> {
    LazyView::new(name, move || async move { Arc::from(html) })
}

fn layout() -> LazyView<str> {
    view(
        "MainLayout",
        "<body><!-- @outlet-begin --><!-- @outlet-end --></body>",
    )
}

fn app_entries() -> Vec<RouteEntry<str>> {
    vec![
        RouteEntry::new("/", layout()).with_children(vec![
            RouteEntry::new("", view("IndexPage", "index")),
            RouteEntry::new("collection_tree", view("CollectionTreePage", "tree")),
            RouteEntry::new("playlists", view("PlaylistsPage", "playlists")),
            RouteEntry::new("file_manager", view("FileManagerPage", "files")),
            RouteEntry::new("jobs", view("JobsPage", "jobs")),
            RouteEntry::new("settings", view("SettingsPage", "settings")),
            RouteEntry::new("commands", view("CommandsPage", "commands")),
        ]),
        RouteEntry::new(CATCH_ALL, view("ErrorNotFound", "not found")),
    ]
}

#[test]
fn test_declared_paths_resolve_to_their_view() {
    let table = RouteTable::new(app_entries()).unwrap();

    let expected = [
        ("/", "IndexPage"),
        ("/collection_tree", "CollectionTreePage"),
        ("/playlists", "PlaylistsPage"),
        ("/file_manager", "FileManagerPage"),
        ("/jobs", "JobsPage"),
        ("/settings", "SettingsPage"),
        ("/commands", "CommandsPage"),
    ];

    for (path, page) in expected {
        let route_match = table.resolve(path).unwrap();

        assert_eq!(route_match.pattern(), path);
        assert_eq!(route_match.view_names(), vec!["MainLayout", page]);
        assert!(!route_match.is_fallback());
    }
}

#[test]
fn test_unknown_paths_resolve_to_not_found() {
    let table = RouteTable::new(app_entries()).unwrap();

    for path in ["/missing", "/playlists/3", "/settings/audio/output", "/Jobz"] {
        let route_match = table.resolve(path).unwrap();

        assert!(route_match.is_fallback(), "{path} should fall back");
        assert_eq!(route_match.view_names(), vec!["ErrorNotFound"]);
    }
}

#[test]
fn test_paths_match_regardless_of_case() {
    let table = RouteTable::new(app_entries()).unwrap();

    for (path, page) in [
        ("/Jobs", "JobsPage"),
        ("/SETTINGS", "SettingsPage"),
        ("/Playlists/", "PlaylistsPage"),
        ("/Collection_Tree", "CollectionTreePage"),
    ] {
        let route_match = table.resolve(path).unwrap();

        assert!(!route_match.is_fallback(), "{path}");
        assert_eq!(route_match.view_names(), vec!["MainLayout", page]);
    }
}

#[test]
fn test_trailing_slash_and_query_are_ignored() {
    let table = RouteTable::new(app_entries()).unwrap();

    let route_match = table.resolve("/playlists/?sort=name").unwrap();

    assert_eq!(route_match.path(), "/playlists");
    assert_eq!(route_match.view_names(), vec!["MainLayout", "PlaylistsPage"]);
}

#[test]
fn test_catch_all_is_last() {
    let table = RouteTable::new(app_entries()).unwrap();
    let patterns: Vec<&str> = table.patterns().collect();

    assert_eq!(patterns.last(), Some(&CATCH_ALL));
    assert!(table.has_fallback());
    assert_eq!(table.len(), 8);
}

#[test]
fn test_catch_all_before_other_entries_is_rejected() {
    let mut entries = app_entries();
    entries.reverse();

    let err = RouteTable::new(entries).unwrap_err();

    assert_eq!(
        err,
        RouteError::CatchAllNotLast {
            pattern: CATCH_ALL.to_owned()
        }
    );
}

#[test]
fn test_nested_catch_all_is_rejected() {
    let entries = vec![RouteEntry::new("/", layout()).with_children(vec![RouteEntry::new(
        "{*rest}",
        view("Missing", "missing"),
    )])];

    let err = RouteTable::new(entries).unwrap_err();

    assert!(matches!(err, RouteError::NestedCatchAll { .. }));
}

#[test]
fn test_empty_group_is_rejected() {
    let err = RouteTable::new(vec![RouteEntry::<str>::group("/admin", Vec::new())]).unwrap_err();

    assert_eq!(
        err,
        RouteError::EmptyEntry {
            pattern: "/admin".to_owned()
        }
    );
}

#[test]
fn test_without_catch_all_unknown_paths_do_not_resolve() {
    let mut entries = app_entries();
    entries.pop();

    let table = RouteTable::new(entries).unwrap();

    assert!(!table.has_fallback());
    assert!(table.resolve("/missing").is_none());
    assert_eq!(
        table.resolve("/jobs").unwrap().view_names(),
        vec!["MainLayout", "JobsPage"]
    );
}

#[test]
fn test_first_declared_entry_wins() {
    let entries = vec![
        RouteEntry::new("/pictures/{picture_id}", view("PicturePage", "picture")),
        RouteEntry::new("/pictures/{folder_id}", view("FolderPage", "folder")),
    ];

    let table = RouteTable::new(entries).unwrap();
    let route_match = table.resolve("/pictures/42").unwrap();

    assert_eq!(route_match.view_names(), vec!["PicturePage"]);
    assert_eq!(
        route_match.params().get("picture_id").map(String::as_str),
        Some("42")
    );
}

#[test]
fn test_parent_without_empty_child_is_navigable() {
    let entries = vec![
        RouteEntry::new("/collection", layout())
            .with_children(vec![RouteEntry::new("tree", view("TreePage", "tree"))]),
    ];

    let table = RouteTable::new(entries).unwrap();

    assert_eq!(
        table.resolve("/collection/tree").unwrap().view_names(),
        vec!["MainLayout", "TreePage"]
    );
    assert_eq!(
        table.resolve("/collection").unwrap().view_names(),
        vec!["MainLayout"]
    );
}

#[tokio::test]
async fn test_views_load_only_on_activation() {
    let entries = app_entries();
    let jobs = entries[0].children()[4].view().unwrap().clone();
    let settings = entries[0].children()[5].view().unwrap().clone();

    let table = RouteTable::new(entries).unwrap();
    let route_match = table.resolve("/jobs").unwrap();

    assert!(!jobs.is_loaded());

    let views = route_match.load_views().await;
    let html = outlet::compose(
        views
            .into_iter()
            .map(|(path, view)| (path, String::from(&*view))),
    );

    assert!(jobs.is_loaded());
    assert!(!settings.is_loaded());
    assert_eq!(
        html,
        "<body><!-- @outlet-begin:/ -->jobs<!-- @outlet-end:/ --></body>"
    );
}
