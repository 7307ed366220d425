//! Books repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookForm, BookQuery},
};

const BOOK_COLUMNS: &str = "id, title, author, genre, year, created_at, updated_at";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Count books matching the query
    pub async fn count(&self, query: &BookQuery<'_>) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM books WHERE {}", query.where_clause());

        let mut builder = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(term) = query.term() {
            for _ in 0..query.bind_count() {
                builder = builder.bind(term);
            }
        }

        Ok(builder.fetch_one(&self.pool).await?)
    }

    /// Books matching the query, in listing order, restricted to `[start, end)`
    pub async fn find_range(&self, query: &BookQuery<'_>, start: i64, end: i64) -> AppResult<Vec<Book>> {
        let sql = format!(
            "SELECT {} FROM books WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
            BOOK_COLUMNS,
            query.where_clause(),
            BookQuery::ORDER_BY
        );

        let mut builder = sqlx::query_as::<_, Book>(&sql);
        if let Some(term) = query.term() {
            for _ in 0..query.bind_count() {
                builder = builder.bind(term);
            }
        }

        let books = builder
            .bind(end - start)
            .bind(start)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        let sql = format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS);
        sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Insert a new book. The form must already be validated.
    pub async fn create(&self, data: &BookForm) -> AppResult<Book> {
        let now = Utc::now();
        let sql = format!(
            r#"
            INSERT INTO books (title, author, genre, year, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );

        let book = sqlx::query_as::<_, Book>(&sql)
            .bind(&data.title)
            .bind(&data.author)
            .bind(data.genre())
            .bind(data.year())
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;
        Ok(book)
    }

    /// Overwrite the editable fields of a book. The form must already be validated.
    pub async fn update(&self, id: i64, data: &BookForm) -> AppResult<Book> {
        let sql = format!(
            r#"
            UPDATE books
            SET title = ?, author = ?, genre = ?, year = ?, updated_at = ?
            WHERE id = ?
            RETURNING {}
            "#,
            BOOK_COLUMNS
        );

        sqlx::query_as::<_, Book>(&sql)
            .bind(&data.title)
            .bind(&data.author)
            .bind(data.genre())
            .bind(data.year())
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
