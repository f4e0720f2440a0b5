//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{
        user::{LoginCredentials, RegisterUser},
        UserInfo,
    },
    AppState,
};

use super::{ApiJson, AuthenticatedUser, MessageResponse};

/// Token issued on register/login
#[derive(Serialize, ToSchema)]
pub struct AuthResponse {
    pub success: bool,
    /// Bearer token for the `Authorization` header
    pub token: String,
    pub user: UserInfo,
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUser,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Missing field or user already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<RegisterUser>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let (token, user) = state.services.auth.register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            token,
            user: UserInfo::from(&user),
        }),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginCredentials,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Malformed body", body = crate::error::ErrorResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(credentials): ApiJson<LoginCredentials>,
) -> AppResult<Json<AuthResponse>> {
    let (token, user) = state.services.auth.login(credentials).await?;

    Ok(Json(AuthResponse {
        success: true,
        token,
        user: UserInfo::from(&user),
    }))
}

/// Revoke the presented session token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Session revoked", body = MessageResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    AuthenticatedUser(auth): AuthenticatedUser,
) -> AppResult<Json<MessageResponse>> {
    state.services.auth.logout(&auth).await?;
    Ok(Json(MessageResponse::ok("Logged out successfully")))
}
