//! Book (catalog entry) model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::review::Review;

/// Full book record, reviews included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub reviews: Vec<Review>,
}

/// Book record as returned by the catalog listing (no reviews)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Field a catalog search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Author,
    Title,
}

impl SearchField {
    /// Query parameter name used by Open Library
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Author => "author",
            SearchField::Title => "title",
        }
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Book {
    pub fn new(
        id: i32,
        isbn: &str,
        title: &str,
        author: &str,
        published_year: i32,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            published_year,
            price,
            reviews: Vec::new(),
        }
    }

    /// Case-insensitive substring match on the given field.
    /// `needle` must already be lowercased.
    pub fn matches(&self, field: SearchField, needle: &str) -> bool {
        let haystack = match field {
            SearchField::Author => &self.author,
            SearchField::Title => &self.title,
        };
        haystack.to_lowercase().contains(needle)
    }
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            published_year: book.published_year,
            price: book.price,
        }
    }
}
