//! Account authentication.
//!
//! Registration and login against the credential store, signed session tokens,
//! and the bearer-token layer guarding authenticated routes.

mod password;
mod token;

pub use password::{hash_password, verify_password};
pub use token::{Claims, TokenService};

use std::sync::Arc;

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::OnceCell;

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{AuthSession, LoginRequest, PublicUser, RegisterRequest};

/// Register, log in and verify sessions.
#[derive(Clone)]
pub struct AuthService {
    repo: Arc<Repository>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
    /// Hash checked for unknown usernames so both login failures cost one bcrypt verify.
    decoy_hash: Arc<OnceCell<String>>,
}

impl AuthService {
    pub fn new(repo: Arc<Repository>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            repo,
            tokens,
            bcrypt_cost,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    async fn decoy_hash(&self) -> Result<String, AppError> {
        let hash = self
            .decoy_hash
            .get_or_try_init(|| hash_password(uuid::Uuid::new_v4().to_string(), self.bcrypt_cost))
            .await?;
        Ok(hash.clone())
    }

    /// Create an account and open a session for it.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, AppError> {
        if request.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".to_string()));
        }
        if request.password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }
        if request.email.trim().is_empty() {
            return Err(AppError::Validation("Email is required".to_string()));
        }
        if !request.email.contains('@') {
            return Err(AppError::Validation("Email is invalid".to_string()));
        }

        let password_hash = hash_password(request.password.clone(), self.bcrypt_cost).await?;
        let account = self
            .repo
            .create_account(&request.username, &request.email, &password_hash)
            .await
            .inspect_err(|e| {
                if matches!(e, AppError::DuplicateIdentity) {
                    tracing::info!("Registration rejected: identity already taken");
                }
            })?;

        let token = self.tokens.issue(&account.id, &account.username)?;
        tracing::info!(user_id = %account.id, "Registered account");

        Ok(AuthSession {
            token,
            user: PublicUser::from(&account),
        })
    }

    /// Check credentials and open a session.
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthSession, AppError> {
        let Some(account) = self
            .repo
            .find_account_by_username(&request.username)
            .await?
        else {
            verify_password(request.password.clone(), self.decoy_hash().await?).await?;
            tracing::info!("Login failed");
            return Err(AppError::InvalidCredentials);
        };

        let valid =
            verify_password(request.password.clone(), account.password_hash.clone()).await?;
        if !valid {
            tracing::info!("Login failed");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&account.id, &account.username)?;
        tracing::info!(user_id = %account.id, "Login successful");

        Ok(AuthSession {
            token,
            user: PublicUser::from(&account),
        })
    }

    /// Validate a bearer token and return its identity claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        self.tokens.verify(token)
    }
}

/// Bearer-token layer: 401 when the token is absent, 403 when it does not verify.
///
/// The `Bearer` scheme is matched case-insensitively. Verified claims are stored
/// in the request extensions for handlers.
pub async fn bearer_auth_layer(
    auth: AuthService,
    mut request: Request,
    next: Next,
) -> Response {
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let Some(token) = bearer else {
        return AppError::MissingToken.into_response();
    };

    match auth.verify(&token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}
