//! Registration, login and session endpoints.

use axum::{extract::State, http::StatusCode, Extension};

use super::{success, ApiJson, ApiResponse, ApiResult};
use crate::auth::Claims;
use crate::errors::AppError;
use crate::models::{AuthSession, LoginRequest, PublicUser, RegisterRequest, SessionInfo};
use crate::AppState;

/// POST /api/auth/register - Create an account.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> ApiResult<AuthSession> {
    let session = state.auth.register(&request).await?;
    Ok(ApiResponse::new(session)
        .with_status(StatusCode::CREATED)
        .with_message("User registered successfully"))
}

/// POST /api/auth/login - Exchange credentials for a token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<AuthSession> {
    let session = state.auth.login(&request).await?;
    Ok(ApiResponse::new(session).with_message("Login successful"))
}

/// GET /api/auth/me - Identity behind the presented token.
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<SessionInfo> {
    let account = state
        .repo
        .get_account(&claims.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

    success(SessionInfo {
        user: PublicUser::from(&account),
        member_since: account.created_at,
        issued_at: claims.iat,
        expires_at: claims.exp,
    })
}
