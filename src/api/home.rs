//! Endpoint directory served at `/`

use axum::Json;
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

const ENDPOINTS: &[&str] = &[
    "GET /api/books",
    "GET /api/books/isbn/:isbn",
    "GET /api/books/author/:author",
    "GET /api/books/title/:title",
    "GET /api/books/reviews/:isbn",
    "POST /api/auth/register",
    "POST /api/auth/login",
    "POST /api/books/reviews/:isbn (Auth)",
    "DELETE /api/books/reviews/:isbn (Auth)",
    "GET /api/books/async/all",
    "GET /api/books/promise/isbn/:isbn",
    "GET /api/books/external/author/:author",
    "GET /api/books/external/title/:title",
];

#[derive(Serialize, ToSchema)]
pub struct EndpointDirectory {
    pub message: String,
    /// `taskN` -> endpoint, in declaration order
    #[schema(value_type = Object)]
    pub endpoints: IndexMap<String, String>,
}

/// API directory
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Available endpoints", body = EndpointDirectory)
    )
)]
pub async fn index() -> Json<EndpointDirectory> {
    let endpoints = ENDPOINTS
        .iter()
        .enumerate()
        .map(|(i, endpoint)| (format!("task{}", i + 1), endpoint.to_string()))
        .collect();

    Json(EndpointDirectory {
        message: "Book Review System API".to_string(),
        endpoints,
    })
}
