//! Student profile endpoints.

use axum::{
    extract::{Path, State},
    Extension,
};

use super::{success, ApiJson, ApiResponse, ApiResult};
use crate::auth::Claims;
use crate::errors::AppError;
use crate::models::{
    validate_skills, validate_subjects, Profile, SaveProfileRequest, SetSkillsRequest,
    SetSubjectsRequest, SkillTag, SubjectTag,
};
use crate::AppState;

/// Profiles are only reachable by their owner.
fn ensure_owner(claims: &Claims, user_id: &str) -> Result<(), AppError> {
    if claims.user_id == user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Cannot access another user's profile".to_string(),
        ))
    }
}

/// GET /api/student/:userId - Get a profile.
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<String>,
) -> ApiResult<Profile> {
    ensure_owner(&claims, &user_id)?;
    success(state.repo.get_profile(&user_id).await?)
}

/// POST /api/student - Create or overwrite the caller's profile.
pub async fn save_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiJson(request): ApiJson<SaveProfileRequest>,
) -> ApiResult<Profile> {
    request.validate().map_err(AppError::Validation)?;

    let profile = state.repo.save_profile(&claims.user_id, &request).await?;
    tracing::debug!(user_id = %claims.user_id, "Saved profile");
    Ok(ApiResponse::new(profile).with_message("Student details saved successfully"))
}

/// PUT /api/student/:userId/skills - Replace the skill list.
pub async fn set_skills(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<String>,
    ApiJson(request): ApiJson<SetSkillsRequest>,
) -> ApiResult<Vec<SkillTag>> {
    ensure_owner(&claims, &user_id)?;
    validate_skills(&request.skills).map_err(AppError::Validation)?;

    let skills = state.repo.set_skills(&user_id, &request.skills).await?;
    Ok(ApiResponse::new(skills).with_message("Skills updated successfully"))
}

/// PUT /api/student/:userId/subjects - Replace the subject list.
pub async fn set_subjects(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<String>,
    ApiJson(request): ApiJson<SetSubjectsRequest>,
) -> ApiResult<Vec<SubjectTag>> {
    ensure_owner(&claims, &user_id)?;
    validate_subjects(&request.subjects).map_err(AppError::Validation)?;

    let subjects = state.repo.set_subjects(&user_id, &request.subjects).await?;
    Ok(ApiResponse::new(subjects).with_message("Subjects updated successfully"))
}
