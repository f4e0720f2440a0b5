//! Deferred catalog endpoints. Same data as the plain lookups, answered after
//! a fixed delay and without the `{success, ...}` envelope.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::BareError, models::Book, AppState};

/// Full catalog (reviews included) after the simulated delay
#[utoipa::path(
    get,
    path = "/api/books/async/all",
    tag = "deferred",
    responses(
        (status = 200, description = "All books", body = Vec<Book>),
        (status = 500, description = "Background task failed", body = crate::error::BareErrorResponse)
    )
)]
pub async fn all_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, BareError> {
    let books = state.services.catalog.list_books_deferred().await?;
    Ok(Json(books))
}

/// Book by ISBN after the simulated delay
#[utoipa::path(
    get,
    path = "/api/books/promise/isbn/{isbn}",
    tag = "deferred",
    params(
        ("isbn" = String, Path, description = "ISBN")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::BareErrorResponse)
    )
)]
pub async fn book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<Book>, BareError> {
    let book = state.services.catalog.get_book_deferred(&isbn).await?;
    Ok(Json(book))
}
