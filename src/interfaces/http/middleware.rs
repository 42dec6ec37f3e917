//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::infrastructure::crypto::{verify_token, Claims, JwtConfig};

use super::common::ApiError;

/// Authentication state shared by the protected routers
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// The user a verified token belongs to.
///
/// Inserted into request extensions by [`auth_middleware`]; handlers pull
/// it out with `Extension<AuthenticatedUser>`.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// Bearer-token authentication middleware.
///
/// A missing or non-Bearer Authorization header is "Missing token"; a
/// present token that fails verification is "Invalid token". Both reject
/// with 401.
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_token)
        .map(String::from);
    let Some(token) = token else {
        return ApiError::unauthorized("Missing token").into_response();
    };

    match verify_token(&token, &auth_state.jwt_config) {
        Ok(claims) => {
            request
                .extensions_mut()
                .insert(AuthenticatedUser::from_claims(claims));
            next.run(request).await
        }
        Err(_) => ApiError::unauthorized("Invalid token").into_response(),
    }
}
