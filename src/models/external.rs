//! Open Library search payloads and the reduced shape we expose

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::book::Book;

/// Search result from the external catalog, reduced to the fields we expose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExternalBook {
    pub title: String,
    /// First listed author, or "Unknown"
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// First listed ISBN, or "N/A"
    pub isbn: String,
}

/// `GET /search.json` response body
#[derive(Debug, Deserialize)]
pub struct OpenLibrarySearchResponse {
    pub docs: Vec<OpenLibraryDoc>,
}

/// One search hit. Any field may be absent or `null`.
#[derive(Debug, Deserialize)]
pub struct OpenLibraryDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i32>,
    pub isbn: Option<Vec<String>>,
}

impl From<OpenLibraryDoc> for ExternalBook {
    fn from(doc: OpenLibraryDoc) -> Self {
        Self {
            title: doc.title.unwrap_or_default(),
            author: doc
                .author_name
                .into_iter()
                .flatten()
                .next()
                .unwrap_or_else(|| "Unknown".to_string()),
            year: doc.first_publish_year,
            isbn: doc
                .isbn
                .into_iter()
                .flatten()
                .next()
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

/// External search answer. Serializes as a bare array either way, so the
/// caller cannot tell a remote hit from the local fallback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExternalSearchResult {
    Remote(Vec<ExternalBook>),
    Local(Vec<Book>),
}

impl ExternalSearchResult {
    pub fn len(&self) -> usize {
        match self {
            ExternalSearchResult::Remote(books) => books.len(),
            ExternalSearchResult::Local(books) => books.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
