//! Catalog endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, BookSummary, SearchField},
    AppState,
};

/// Catalog listing
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<BookSummary>,
}

/// Search results (full records)
#[derive(Serialize, ToSchema)]
pub struct BookSearchResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Book>,
}

impl From<Vec<Book>> for BookSearchResponse {
    fn from(data: Vec<Book>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// A single book
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub success: bool,
    pub data: Book,
}

/// List every book in the catalog (reviews omitted)
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<BookListResponse> {
    let data = state.services.catalog.list_books().await;
    Json(BookListResponse {
        success: true,
        count: data.len(),
        data,
    })
}

/// Get book details by ISBN
#[utoipa::path(
    get,
    path = "/api/books/isbn/{isbn}",
    tag = "books",
    params(
        ("isbn" = String, Path, description = "ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(&isbn).await?;
    Ok(Json(BookResponse {
        success: true,
        data: book,
    }))
}

/// Books whose author contains the given text (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/books/author/{author}",
    tag = "books",
    params(
        ("author" = String, Path, description = "Author name or fragment")
    ),
    responses(
        (status = 200, description = "Matching books, possibly none", body = BookSearchResponse)
    )
)]
pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Json<BookSearchResponse> {
    Json(state.services.catalog.search(SearchField::Author, &author).await.into())
}

/// Books whose title contains the given text (case-insensitive)
#[utoipa::path(
    get,
    path = "/api/books/title/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Title or fragment")
    ),
    responses(
        (status = 200, description = "Matching books, possibly none", body = BookSearchResponse)
    )
)]
pub async fn books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Json<BookSearchResponse> {
    Json(state.services.catalog.search(SearchField::Title, &title).await.into())
}
