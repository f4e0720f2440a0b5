//! Review endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Review, ReviewInput},
    AppState,
};

use super::{ApiJson, AuthenticatedUser, MessageResponse};

#[derive(Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Review>,
}

/// Reviews of a book, oldest first
#[utoipa::path(
    get,
    path = "/api/books/reviews/{isbn}",
    tag = "reviews",
    params(
        ("isbn" = String, Path, description = "ISBN")
    ),
    responses(
        (status = 200, description = "Reviews of the book", body = ReviewListResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<ReviewListResponse>> {
    let data = state.services.catalog.get_reviews(&isbn).await?;
    Ok(Json(ReviewListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

/// Add a review, or replace the caller's existing review of this book
#[utoipa::path(
    post,
    path = "/api/books/reviews/{isbn}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(
        ("isbn" = String, Path, description = "ISBN")
    ),
    request_body = ReviewInput,
    responses(
        (status = 200, description = "Review stored", body = MessageResponse),
        (status = 400, description = "Malformed body, missing rating or comment", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_review(
    State(state): State<AppState>,
    AuthenticatedUser(auth): AuthenticatedUser,
    Path(isbn): Path<String>,
    ApiJson(input): ApiJson<ReviewInput>,
) -> AppResult<Json<MessageResponse>> {
    state.services.reviews.upsert(&isbn, auth.user_id, input).await?;
    Ok(Json(MessageResponse::ok("Review added/updated successfully")))
}

/// Delete the caller's review of this book
#[utoipa::path(
    delete,
    path = "/api/books/reviews/{isbn}",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(
        ("isbn" = String, Path, description = "ISBN")
    ),
    responses(
        (status = 200, description = "Review deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Book or review not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_review(
    State(state): State<AppState>,
    AuthenticatedUser(auth): AuthenticatedUser,
    Path(isbn): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.reviews.delete(&isbn, auth.user_id).await?;
    Ok(Json(MessageResponse::ok("Review deleted successfully")))
}
