//! Recommendation endpoints.

use axum::{extract::State, Extension};

use super::{success, ApiJson, ApiResult};
use crate::auth::Claims;
use crate::models::RecommendRequest;
use crate::recommend::{recommend, Recommendations};
use crate::AppState;

/// GET /api/recommendations - Recommendations for the caller's stored skills.
///
/// A caller without a profile gets the fallback lists.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Recommendations> {
    let skills = state
        .repo
        .find_profile(&claims.user_id)
        .await?
        .map(|profile| profile.skill_names())
        .unwrap_or_default();

    success(recommend(&skills))
}

/// POST /api/recommendations - Recommendations for an explicit skill list.
pub async fn recommend_for_skills(
    ApiJson(request): ApiJson<RecommendRequest>,
) -> ApiResult<Recommendations> {
    success(recommend(&request.skills))
}
