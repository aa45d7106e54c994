//! Request body for ad-hoc recommendations.

use serde::Deserialize;

/// Skill names held by the client, matched without touching the stored profile.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}
