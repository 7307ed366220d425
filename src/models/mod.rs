//! Data models for Bookshelf

pub mod book;
pub mod pagination;

// Re-export commonly used types
pub use book::{Book, BookForm, BookQuery, SearchForm};
pub use pagination::{Page, RequestedPage, PAGE_SIZE};
