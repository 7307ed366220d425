//! Book listing and book forms

use std::fmt::Write;

use axum::response::Html;

use super::{escape, layout};
use crate::{
    error::FieldError,
    models::{book::BookForm, pagination::Page, Book},
};

/// Book listing, optionally the result of a search.
///
/// With a search term the pagination buttons re-post the term so that
/// moving between pages keeps the filter.
pub fn index(page: &Page<Book>, search: Option<&str>) -> Html<String> {
    let mut content = String::new();

    content.push_str("        <h1>Books</h1>\n");
    let _ = write!(
        content,
        r#"        <form class="search" method="post" action="/books">
            <input type="search" name="search" placeholder="Search..." value="{}">
            <button type="submit">Search</button>
        </form>
        <p><a class="button" href="/books/new">Create New Book</a></p>
"#,
        escape(search.unwrap_or_default())
    );

    if page.items.is_empty() {
        content.push_str("        <p class=\"no-results\">No books found.</p>\n");
    } else {
        content.push_str(
            "        <table>\n            <thead>\n                <tr><th>Title</th><th>Author</th><th>Genre</th><th>Year</th></tr>\n            </thead>\n            <tbody>\n",
        );
        for book in &page.items {
            let _ = writeln!(
                content,
                r#"                <tr class="book"><td><a href="/books/{id}">{title}</a></td><td>{author}</td><td>{genre}</td><td>{year}</td></tr>"#,
                id = book.id,
                title = escape(&book.title),
                author = escape(&book.author),
                genre = escape(book.genre.as_deref().unwrap_or_default()),
                year = escape(book.year.as_deref().unwrap_or_default()),
            );
        }
        content.push_str("            </tbody>\n        </table>\n");
    }

    content.push_str(&pagination(page, search));

    layout("Books", &content)
}

fn pagination(page: &Page<Book>, search: Option<&str>) -> String {
    let mut nav = String::new();
    let _ = writeln!(
        nav,
        r#"        <nav class="pagination" data-page-count="{}" data-page="{}">"#,
        page.page_count,
        escape(&page.page.to_string())
    );
    nav.push_str("            <ul>\n");

    for number in 1..=page.page_count {
        let active = if page.page.is(number) { " active" } else { "" };
        match search {
            Some(term) => {
                let _ = writeln!(
                    nav,
                    r#"                <li><form method="post" action="/books?page={n}"><input type="hidden" name="search" value="{term}"><button class="page-link{active}" type="submit">{n}</button></form></li>"#,
                    n = number,
                    term = escape(term),
                    active = active,
                );
            }
            None => {
                let _ = writeln!(
                    nav,
                    r#"                <li><a class="page-link{active}" href="/books?page={n}">{n}</a></li>"#,
                    n = number,
                    active = active,
                );
            }
        }
    }

    nav.push_str("            </ul>\n        </nav>\n");
    nav
}

/// Creation form, refilled with the submitted values after a failed attempt
pub fn new_book(form: &BookForm, errors: &[FieldError]) -> Html<String> {
    let content = book_form("New Book", "/books/new", form, errors, "Create New Book", None);
    layout("New Book", &content)
}

/// Edit form for book `id`
pub fn update_book(id: i64, form: &BookForm, errors: &[FieldError]) -> Html<String> {
    let action = format!("/books/{}", id);
    let delete_action = format!("/books/{}/delete", id);
    let content = book_form(
        "Update Book",
        &action,
        form,
        errors,
        "Update Book",
        Some(&delete_action),
    );
    layout("Update Book", &content)
}

fn book_form(
    heading: &str,
    action: &str,
    form: &BookForm,
    errors: &[FieldError],
    submit_label: &str,
    delete_action: Option<&str>,
) -> String {
    let mut content = String::new();
    let _ = writeln!(content, "        <h1>{}</h1>", escape(heading));

    if !errors.is_empty() {
        content.push_str("        <div class=\"validation-errors\">\n            <h2>Oooops!</h2>\n            <ul>\n");
        for error in errors {
            let _ = writeln!(
                content,
                r#"                <li data-field="{}">{}</li>"#,
                escape(&error.field),
                escape(&error.message)
            );
        }
        content.push_str("            </ul>\n        </div>\n");
    }

    let _ = writeln!(content, r#"        <form method="post" action="{}">"#, escape(action));
    for (name, label, value) in [
        ("title", "Title", &form.title),
        ("author", "Author", &form.author),
        ("genre", "Genre", &form.genre),
        ("year", "Year", &form.year),
    ] {
        let _ = writeln!(
            content,
            r#"            <p><label for="{name}">{label}</label><input name="{name}" type="text" id="{name}" value="{value}"></p>"#,
            name = name,
            label = label,
            value = escape(value),
        );
    }
    let _ = writeln!(
        content,
        r#"            <p><input type="submit" value="{}"></p>"#,
        escape(submit_label)
    );
    content.push_str("        </form>\n");

    if let Some(delete_action) = delete_action {
        let _ = writeln!(
            content,
            r#"        <form method="post" action="{}"><p><input type="submit" value="Delete Book"></p></form>"#,
            escape(delete_action)
        );
    }
    content.push_str("        <p><a class=\"button\" href=\"/books\">Cancel</a></p>");
    content
}
