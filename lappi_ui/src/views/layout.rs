use super::{Page, ViewContext, nav_link, outlet};

const NAVIGATION: [(&str, &str); 7] = [
    ("/", "Home"),
    ("/collection_tree", "Collection"),
    ("/playlists", "Playlists"),
    ("/file_manager", "Files"),
    ("/jobs", "Jobs"),
    ("/settings", "Settings"),
    ("/commands", "Commands"),
];

/// Page frame shared by every navigable route: head, navigation bar and an
/// outlet for the active page.
#[derive(Debug, Clone, Copy, Default)]
pub struct MainLayout;

impl Page for MainLayout {
    fn render(&self, ctx: &ViewContext<'_>) -> String {
        let links: String = NAVIGATION
            .iter()
            .map(|(href, text)| nav_link(href, text, ctx.path))
            .collect();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>Lappi</title>
<link rel="stylesheet" href="/static/styles.css" />
</head>
<body>
<header class="main-header"><span class="brand">Lappi</span><nav>{links}</nav></header>
<main class="main-content">{}</main>
</body>
</html>"#,
            outlet()
        )
    }
}
