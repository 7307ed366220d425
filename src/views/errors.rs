//! Not-found and server error pages

use axum::{http::StatusCode, response::Html};

use super::layout;

pub fn page_not_found() -> Html<String> {
    layout(
        "Page Not Found",
        r#"        <h1>Page Not Found</h1>
        <p class="error-message">Sorry, this page does not exist!</p>
        <p><a class="button" href="/books">Home</a></p>"#,
    )
}

pub fn server_error(status: StatusCode) -> Html<String> {
    let content = format!(
        r#"        <h1>Server Error</h1>
        <p class="error-status">{}</p>
        <p class="error-message">There was a server error!</p>
        <p><a class="button" href="/books">Home</a></p>"#,
        status.as_u16()
    );
    layout("Server Error", &content)
}
