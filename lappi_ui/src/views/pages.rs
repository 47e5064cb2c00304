use super::{Page, ViewContext, escape_html};

fn section(class: &str, title: &str, body: &str) -> String {
    format!(r#"<section class="page {class}"><h1>{title}</h1>{body}</section>"#)
}

/// Landing page.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexPage;

impl Page for IndexPage {
    fn render(&self, _ctx: &ViewContext<'_>) -> String {
        section(
            "index-page",
            "Lappi",
            "<p>Browse the collection, manage playlists and files, follow running jobs.</p>",
        )
    }
}

/// Folder tree of the collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionTreePage;

impl Page for CollectionTreePage {
    fn render(&self, _ctx: &ViewContext<'_>) -> String {
        section(
            "collection-tree-page",
            "Collection",
            r#"<div class="collection-tree" data-root-folder="0"></div>"#,
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
#[allow(missing_docs)]
pub struct PlaylistsPage;

impl Page for PlaylistsPage {
    fn render(&self, _ctx: &ViewContext<'_>) -> String {
        section(
            "playlists-page",
            "Playlists",
            r#"<ul class="playlists"></ul>"#,
        )
    }
}

/// Browser over the files known to the collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileManagerPage;

impl Page for FileManagerPage {
    fn render(&self, _ctx: &ViewContext<'_>) -> String {
        section(
            "file-manager-page",
            "Files",
            r#"<div class="file-manager"></div>"#,
        )
    }
}

/// Background jobs and their progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobsPage;

impl Page for JobsPage {
    fn render(&self, _ctx: &ViewContext<'_>) -> String {
        section("jobs-page", "Jobs", r#"<table class="jobs"></table>"#)
    }
}

/// Shows which API server this page is bound to.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsPage;

impl Page for SettingsPage {
    fn render(&self, ctx: &ViewContext<'_>) -> String {
        let api = ctx
            .api_base_url()
            .map_or_else(|| "not connected".to_owned(), escape_html);

        section(
            "settings-page",
            "Settings",
            &format!(r#"<dl><dt>API server</dt><dd class="api-base-url">{api}</dd></dl>"#),
        )
    }
}

#[derive(Debug, Clone, Copy, Default)]
#[allow(missing_docs)]
pub struct CommandsPage;

impl Page for CommandsPage {
    fn render(&self, _ctx: &ViewContext<'_>) -> String {
        section(
            "commands-page",
            "Commands",
            r#"<form class="command-runner"><input name="command" autocomplete="off" /></form>"#,
        )
    }
}
