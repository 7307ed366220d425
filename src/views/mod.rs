//! Server-side HTML views

pub mod books;
pub mod errors;

use axum::response::Html;

/// Wrap page content in the shared document layout
pub fn layout(title: &str, content: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/stylesheets/style.css">
</head>
<body>
    <div id="wrapper">
{content}
    </div>
</body>
</html>
"#,
        title = escape(title),
        content = content,
    ))
}

/// Escape text for inclusion in HTML element content or quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
