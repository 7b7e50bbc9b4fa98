use crate::application::templates::escape_html;
use crate::domain::Website;

pub const TAILWIND_RUNTIME_URL: &str = "https://cdn.tailwindcss.com";

/// Standalone HTML document with the components in display order.
pub fn render_document(website: &Website) -> String {
    let body = website
        .sorted_components()
        .into_iter()
        .map(|component| component.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <script src="{runtime}"></script>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(&website.title),
        runtime = TAILWIND_RUNTIME_URL,
        body = body,
    )
}
