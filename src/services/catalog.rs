//! Catalog management service

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookForm, BookQuery},
        pagination::{page_count, Page, RequestedPage},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books, newest first, one page at a time
    pub async fn list_books(&self, page: RequestedPage) -> AppResult<Page<Book>> {
        self.paginate(&BookQuery::all(), page).await
    }

    /// Books whose title, author, genre or year contains `term`
    pub async fn search_books(&self, term: &str, page: RequestedPage) -> AppResult<Page<Book>> {
        self.paginate(&BookQuery::search(term), page).await
    }

    async fn paginate(&self, query: &BookQuery<'_>, page: RequestedPage) -> AppResult<Page<Book>> {
        let total = self.repository.books.count(query).await?;

        let items = match page.bounds() {
            Some((start, end)) if start < total => {
                self.repository.books.find_range(query, start, end).await?
            }
            _ => Vec::new(),
        };

        Ok(Page {
            items,
            total,
            page_count: page_count(total),
            page,
        })
    }

    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Validate and insert a new book
    pub async fn create_book(&self, data: &BookForm) -> AppResult<Book> {
        data.check().map_err(AppError::Validation)?;
        let book = self.repository.books.create(data).await?;
        tracing::info!("Created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Overwrite a book's editable fields.
    ///
    /// A missing book is reported before the form is validated.
    pub async fn update_book(&self, id: i64, data: &BookForm) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await?;
        data.check().map_err(AppError::Validation)?;
        let book = self.repository.books.update(id, data).await?;
        tracing::info!("Updated book id={}", book.id);
        Ok(book)
    }

    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }
}
