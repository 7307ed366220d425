//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::FieldError;

/// Book record
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    /// Publication year, kept as text
    pub year: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable book fields as submitted by the new/edit forms.
///
/// Missing fields deserialize to empty strings so that an incomplete
/// submission reaches validation instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct BookForm {
    #[validate(length(min = 1, message = "Please provide a value for \"Title\""))]
    pub title: String,
    #[validate(length(min = 1, message = "Please provide a value for \"Author\""))]
    pub author: String,
    pub genre: String,
    pub year: String,
}

/// Order in which field errors are reported
const FIELD_ORDER: [&str; 4] = ["title", "author", "genre", "year"];

impl BookForm {
    /// Validate the form, returning field errors in form order
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        let errors = match self.validate() {
            Ok(()) => return Ok(()),
            Err(errors) => errors,
        };

        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| FieldError {
                    field: field.clone(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for \"{}\"", field)),
                })
            })
            .collect();

        fields.sort_by_key(|e| {
            FIELD_ORDER
                .iter()
                .position(|f| *f == e.field)
                .unwrap_or(FIELD_ORDER.len())
        });
        Err(fields)
    }

    /// Genre to persist; blank input is stored as NULL
    pub fn genre(&self) -> Option<&str> {
        non_blank(&self.genre)
    }

    /// Year to persist; blank input is stored as NULL
    pub fn year(&self) -> Option<&str> {
        non_blank(&self.year)
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone().unwrap_or_default(),
            year: book.year.clone().unwrap_or_default(),
        }
    }
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Search form posted to the listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search: String,
}

/// Filter and ordering for book listings.
///
/// A non-empty term matches a book when the title, author, genre or year
/// contains it as a case-sensitive substring.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookQuery<'a> {
    term: Option<&'a str>,
}

impl<'a> BookQuery<'a> {
    pub const ORDER_BY: &'static str = "created_at DESC, id DESC";

    const SEARCHED_COLUMNS: [&'static str; 4] = ["title", "author", "genre", "year"];

    /// Listing of every book
    pub fn all() -> Self {
        Self { term: None }
    }

    /// Listing filtered by `term`; an empty term filters nothing
    pub fn search(term: &'a str) -> Self {
        Self {
            term: if term.is_empty() { None } else { Some(term) },
        }
    }

    /// Term to bind once per searched column, if any
    pub fn term(&self) -> Option<&'a str> {
        self.term
    }

    /// SQL predicate with one `?` placeholder per searched column
    pub fn where_clause(&self) -> String {
        match self.term {
            None => "1=1".to_string(),
            Some(_) => {
                // instr() is case-sensitive and treats % and _ literally, unlike LIKE
                let checks: Vec<String> = Self::SEARCHED_COLUMNS
                    .iter()
                    .map(|column| format!("instr(COALESCE({}, ''), ?) > 0", column))
                    .collect();
                format!("({})", checks.join(" OR "))
            }
        }
    }

    /// Number of times the term must be bound
    pub fn bind_count(&self) -> usize {
        match self.term {
            None => 0,
            Some(_) => Self::SEARCHED_COLUMNS.len(),
        }
    }
}
