//! Account business logic: signup, login, current-user lookup

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainError, DomainResult, PublicUser, Store, User};
use crate::infrastructure::crypto::{create_token, hash_password, verify_password, JwtConfig};

/// Service for account registration and authentication.
///
/// Stateless over the store; tokens carry the whole session, so there is
/// nothing to remember between calls.
pub struct AccountService {
    store: Arc<dyn Store>,
    jwt_config: JwtConfig,
}

impl AccountService {
    pub fn new(store: Arc<dyn Store>, jwt_config: JwtConfig) -> Self {
        Self { store, jwt_config }
    }

    /// Register a new user and issue a token for it.
    pub async fn signup(
        &self,
        name: Option<&str>,
        email: &str,
        password: &str,
    ) -> DomainResult<(String, PublicUser)> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Email & password required".to_string(),
            ));
        }
        if password.trim().len() < 4 {
            return Err(DomainError::Validation(
                "Password must be at least 4 characters".to_string(),
            ));
        }
        if self.store.find_user_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already used".to_string()));
        }

        let password_hash =
            hash_password(password).map_err(|e| DomainError::Internal(e.to_string()))?;

        // Fall back to the email local-part when no display name was given
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(String::from)
            .unwrap_or_else(|| email.split('@').next().unwrap_or(email).to_string());

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email: email.to_string(),
            password_hash,
            role: "user".to_string(),
        };
        let user = self.store.upsert_user(user).await?;

        let token = create_token(&user.id, &user.email, &self.jwt_config)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        info!("User signed up: {}", user.email);
        Ok((token, user.into()))
    }

    /// Authenticate an existing user.
    ///
    /// Unknown email and wrong password produce the exact same error so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<(String, PublicUser)> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::Validation(
                "Email & password required".to_string(),
            ));
        }

        let invalid = || DomainError::Unauthorized("Invalid credentials".to_string());

        let user = self
            .store
            .find_user_by_email(email)
            .await?
            .ok_or_else(invalid)?;

        let ok = verify_password(password, &user.password_hash).unwrap_or(false);
        if !ok {
            return Err(invalid());
        }

        let token = create_token(&user.id, &user.email, &self.jwt_config)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        Ok((token, user.into()))
    }

    /// Look up the public projection of the authenticated user.
    pub async fn me(&self, user_id: &str) -> DomainResult<PublicUser> {
        let user = self
            .store
            .get_user_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::NotFound("User not found".to_string()))?;
        Ok(user.into())
    }
}
