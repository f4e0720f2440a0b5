//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, books, deferred, external, health, home, reviews};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Review API",
        version = "1.0.0",
        description = "In-memory book catalog with reviews and Open Library search"
    ),
    paths(
        // Health
        home::index,
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::books_by_author,
        books::books_by_title,
        // Reviews
        reviews::list_reviews,
        reviews::upsert_review,
        reviews::delete_review,
        // Auth
        auth::register,
        auth::login,
        auth::logout,
        // Deferred
        deferred::all_books,
        deferred::book_by_isbn,
        // External
        external::search_by_author,
        external::search_by_title,
    ),
    components(
        schemas(
            // Books
            crate::models::Book,
            crate::models::BookSummary,
            books::BookListResponse,
            books::BookSearchResponse,
            books::BookResponse,
            // Reviews
            crate::models::Review,
            crate::models::ReviewInput,
            reviews::ReviewListResponse,
            // Auth
            crate::models::Role,
            crate::models::UserInfo,
            crate::models::user::RegisterUser,
            crate::models::user::LoginCredentials,
            auth::AuthResponse,
            // External
            crate::models::ExternalBook,
            // Misc
            home::EndpointDirectory,
            health::HealthResponse,
            crate::api::MessageResponse,
            // Errors
            crate::error::ErrorResponse,
            crate::error::BareErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog queries"),
        (name = "reviews", description = "Book reviews"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "deferred", description = "Delayed catalog lookups"),
        (name = "external", description = "Open Library search with local fallback")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
