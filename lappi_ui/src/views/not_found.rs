use super::{Page, ViewContext, escape_html};

/// Rendered for any path no other route claims.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorNotFound;

impl Page for ErrorNotFound {
    fn render(&self, ctx: &ViewContext<'_>) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<title>Not found - Lappi</title>
<link rel="stylesheet" href="/static/styles.css" />
</head>
<body>
<section class="error-not-found">
<h1>404</h1>
<p>Nothing here: <code>{}</code></p>
<a href="/">Go home</a>
</section>
</body>
</html>"#,
            escape_html(ctx.path)
        )
    }
}
