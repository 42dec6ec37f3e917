//! Authentication API handlers

use std::sync::Arc;

use axum::{extract::State, Extension, Json};

use super::dto::{AuthResponse, LoginRequest, SignupRequest};
use crate::application::AccountService;
use crate::domain::PublicUser;
use crate::interfaces::http::common::{ApiError, ErrorBody};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub accounts: Arc<AccountService>,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "Authentication",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created, token issued", body = AuthResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 409, description = "Email already used", body = ErrorBody)
    )
)]
pub async fn signup(
    State(state): State<AuthHandlerState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (token, user) = state
        .accounts
        .signup(
            request.name.as_deref(),
            request.email.as_deref().unwrap_or(""),
            request.password.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(Json(AuthResponse { token, user }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = AuthResponse),
        (status = 400, description = "Missing fields", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (token, user) = state
        .accounts
        .login(
            request.email.as_deref().unwrap_or(""),
            request.password.as_deref().unwrap_or(""),
        )
        .await?;
    Ok(Json(AuthResponse { token, user }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The authenticated user", body = PublicUser),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "User no longer exists", body = ErrorBody)
    )
)]
pub async fn me(
    State(state): State<AuthHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<PublicUser>, ApiError> {
    Ok(Json(state.accounts.me(&user.user_id).await?))
}
