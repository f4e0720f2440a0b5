//! API handlers for the book review REST endpoints

pub mod auth;
pub mod books;
pub mod deferred;
pub mod external;
pub mod health;
pub mod home;
pub mod openapi;
pub mod reviews;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{error::AppError, services::auth::AuthContext, AppState};

/// Extractor for the user behind a `Bearer` session token
pub struct AuthenticatedUser(pub AuthContext);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let not_authorized = || AppError::Authentication("Not authorized".to_string());

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(not_authorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(not_authorized)?;

        let context = state.services.auth.authenticate(token).await?;

        Ok(AuthenticatedUser(context))
    }
}

/// JSON body extractor whose rejections use the `{success:false,error}` envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// `{success, message}` response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Build the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Catalog
        .route("/books", get(books::list_books))
        .route("/books/isbn/:isbn", get(books::get_book))
        .route("/books/author/:author", get(books::books_by_author))
        .route("/books/title/:title", get(books::books_by_title))
        // Reviews
        .route(
            "/books/reviews/:isbn",
            get(reviews::list_reviews)
                .post(reviews::upsert_review)
                .delete(reviews::delete_review),
        )
        // Deferred variants
        .route("/books/async/all", get(deferred::all_books))
        .route("/books/promise/isbn/:isbn", get(deferred::book_by_isbn))
        // External search
        .route("/books/external/author/:author", get(external::search_by_author))
        .route("/books/external/title/:title", get(external::search_by_title))
        // Authentication
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout));

    let app = Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api)
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    app.merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
