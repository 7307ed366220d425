//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use super::{HtmlForm, PageParam};
use crate::{
    error::{AppError, AppResult},
    models::{BookForm, SearchForm},
    views, AppState,
};

/// Non-numeric ids cannot match a record and are handled like missing ones
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// List books, newest first
pub async fn list_books(
    State(state): State<AppState>,
    PageParam(page): PageParam,
) -> AppResult<Html<String>> {
    let books = state.services.catalog.list_books(page).await?;
    Ok(views::books::index(&books, None))
}

/// Search books by title, author, genre or year
pub async fn search_books(
    State(state): State<AppState>,
    PageParam(page): PageParam,
    HtmlForm(form): HtmlForm<SearchForm>,
) -> AppResult<Html<String>> {
    let books = state.services.catalog.search_books(&form.search, page).await?;
    Ok(views::books::index(&books, Some(&form.search)))
}

/// Empty creation form
pub async fn new_book() -> Html<String> {
    views::books::new_book(&BookForm::default(), &[])
}

/// Create a book, or re-render the form with field errors
pub async fn create_book(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<BookForm>,
) -> AppResult<Response> {
    match state.services.catalog.create_book(&form).await {
        Ok(_) => Ok(Redirect::to("/books").into_response()),
        Err(AppError::Validation(errors)) => {
            Ok(views::books::new_book(&form, &errors).into_response())
        }
        Err(e) => Err(e),
    }
}

/// Edit form for one book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let Some(id) = parse_id(&id) else {
        return Ok(views::errors::page_not_found());
    };

    match state.services.catalog.get_book(id).await {
        Ok(book) => Ok(views::books::update_book(book.id, &BookForm::from(&book), &[])),
        Err(AppError::NotFound(_)) => Ok(views::errors::page_not_found()),
        Err(e) => Err(e),
    }
}

/// Update a book, or re-render the edit form with field errors
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    HtmlForm(form): HtmlForm<BookForm>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(views::errors::page_not_found().into_response());
    };

    match state.services.catalog.update_book(id, &form).await {
        Ok(_) => Ok(Redirect::to("/books").into_response()),
        Err(AppError::Validation(errors)) => {
            Ok(views::books::update_book(id, &form, &errors).into_response())
        }
        Err(AppError::NotFound(_)) => Ok(views::errors::page_not_found().into_response()),
        Err(e) => Err(e),
    }
}

/// Delete a book; a missing book yields a bare 404
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let Some(id) = parse_id(&id) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    match state.services.catalog.delete_book(id).await {
        Ok(()) => Ok(Redirect::to("/books").into_response()),
        Err(AppError::NotFound(_)) => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(e) => Err(e),
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, views::errors::page_not_found()).into_response()
}
