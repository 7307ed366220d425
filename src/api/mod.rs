//! HTTP handlers and routing for Bookshelf

pub mod books;

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query},
    http::request::Parts,
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::{error::AppError, models::RequestedPage, AppState};

/// Requested page read from the `page` query parameter.
///
/// Never rejects: anything that does not decode to a single page becomes a
/// malformed page, which renders as an empty listing.
pub struct PageParam(pub RequestedPage);

#[async_trait]
impl<S> FromRequestParts<S> for PageParam
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let page = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => RequestedPage::from_query_pairs(&pairs),
            Err(rejection) => {
                tracing::debug!("Unreadable query string: {}", rejection);
                RequestedPage::Malformed(parts.uri.query().unwrap_or_default().to_string())
            }
        };
        Ok(PageParam(page))
    }
}

/// URL-encoded form body whose rejection renders as an HTML error page
#[derive(FromRequest)]
#[from_request(via(axum::Form), rejection(AppError))]
pub struct HtmlForm<T>(pub T);

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    let book_routes = Router::new()
        .route("/", get(|| async { Redirect::to("/books") }))
        .route("/books", get(books::list_books).post(books::search_books))
        .route("/books/new", get(books::new_book).post(books::create_book))
        .route("/books/:id", get(books::get_book).post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book))
        .with_state(state);

    Router::new()
        .merge(book_routes)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(books::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
