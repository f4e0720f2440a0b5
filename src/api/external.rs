//! External catalog search endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    models::{ExternalSearchResult, SearchField},
    AppState,
};

/// Search Open Library by author. Falls back to the local catalog on failure.
#[utoipa::path(
    get,
    path = "/api/books/external/author/{author}",
    tag = "external",
    params(
        ("author" = String, Path, description = "Author name")
    ),
    responses(
        (status = 200, description = "Remote results, or local matches when the remote search fails", body = Vec<crate::models::ExternalBook>)
    )
)]
pub async fn search_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Json<ExternalSearchResult> {
    Json(state.services.external.search(SearchField::Author, &author).await)
}

/// Search Open Library by title. Falls back to the local catalog on failure.
#[utoipa::path(
    get,
    path = "/api/books/external/title/{title}",
    tag = "external",
    params(
        ("title" = String, Path, description = "Book title")
    ),
    responses(
        (status = 200, description = "Remote results, or local matches when the remote search fails", body = Vec<crate::models::ExternalBook>)
    )
)]
pub async fn search_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Json<ExternalSearchResult> {
    Json(state.services.external.search(SearchField::Title, &title).await)
}
