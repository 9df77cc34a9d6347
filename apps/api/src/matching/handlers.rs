//! Axum route handlers for the matching API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::badge::{badge_for, Badge};
use crate::matching::calculator::{calculate_match, MatchReport};
use crate::matching::ranker::{
    recommend_candidates_for_target, recommend_targets_for_candidate, RankOptions, RankedEntry,
    SkillProfile,
};
use crate::models::project::ProjectRow;
use crate::models::user::UserRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub report: MatchReport,
    pub badge: Badge,
}

#[derive(Debug, Deserialize)]
pub struct ProjectRecommendationRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub targets: Vec<SkillProfile>,
    pub min_percentage: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateRecommendationRequest {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub candidates: Vec<SkillProfile>,
    pub min_percentage: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub min_percentage: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse<T> {
    pub recommendations: Vec<RankedEntry<T>>,
    pub min_percentage: u32,
}

impl<T> RecommendationResponse<T> {
    fn new(recommendations: Vec<RankedEntry<T>>, options: &RankOptions) -> Self {
        Self {
            recommendations,
            min_percentage: options.min_percentage,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores one candidate skill set against one required skill set.
pub async fn handle_match(Json(request): Json<MatchRequest>) -> Json<MatchResponse> {
    let report = calculate_match(&request.candidate_skills, &request.required_skills);
    let badge = badge_for(report.percentage);
    Json(MatchResponse { report, badge })
}

/// POST /api/v1/recommendations/projects
///
/// Ranks caller-supplied targets for a candidate skill set.
pub async fn handle_recommend_projects(
    State(state): State<AppState>,
    Json(request): Json<ProjectRecommendationRequest>,
) -> Result<Json<RecommendationResponse<SkillProfile>>, AppError> {
    let options = RankOptions::try_new(
        request
            .min_percentage
            .unwrap_or(state.config.match_defaults.project_min_percentage),
        request.limit,
    )?;

    let ranked =
        recommend_targets_for_candidate(&request.candidate_skills, request.targets, &options);

    Ok(Json(RecommendationResponse::new(ranked, &options)))
}

/// POST /api/v1/recommendations/candidates
///
/// Ranks caller-supplied candidates for a required skill set.
pub async fn handle_recommend_candidates(
    State(state): State<AppState>,
    Json(request): Json<CandidateRecommendationRequest>,
) -> Result<Json<RecommendationResponse<SkillProfile>>, AppError> {
    let options = RankOptions::try_new(
        request
            .min_percentage
            .unwrap_or(state.config.match_defaults.candidate_min_percentage),
        request.limit,
    )?;

    let ranked =
        recommend_candidates_for_target(&request.required_skills, request.candidates, &options);

    Ok(Json(RecommendationResponse::new(ranked, &options)))
}

/// GET /api/v1/users/:id/recommended-projects
///
/// Ranks all open projects for a user, excluding projects the user created.
pub async fn handle_user_recommended_projects(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<RecommendationResponse<ProjectRow>>, AppError> {
    let defaults = state.config.match_defaults;
    let options = RankOptions::try_new(
        query.min_percentage.unwrap_or(defaults.project_min_percentage),
        Some(query.limit.unwrap_or(defaults.page_limit)),
    )?;

    let user = state
        .directory
        .find_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let projects = state
        .directory
        .open_projects()
        .await?
        .into_iter()
        .filter(|p| p.created_by != Some(user_id));

    let ranked = recommend_targets_for_candidate(&user.skills, projects, &options);
    info!(
        "Recommended {} projects for user {user_id} (min {}%)",
        ranked.len(),
        options.min_percentage
    );

    Ok(Json(RecommendationResponse::new(ranked, &options)))
}

/// GET /api/v1/projects/:id/recommended-users
///
/// Ranks public users with skills for a project, excluding its creator.
pub async fn handle_project_recommended_users(
    State(state): State<AppState>,
    Path(project_id): Path<Uuid>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<RecommendationResponse<UserRow>>, AppError> {
    let defaults = state.config.match_defaults;
    let options = RankOptions::try_new(
        query.min_percentage.unwrap_or(defaults.candidate_min_percentage),
        Some(query.limit.unwrap_or(defaults.page_limit)),
    )?;

    let project = state
        .directory
        .find_project(project_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {project_id} not found")))?;

    let users = state
        .directory
        .public_users_with_skills()
        .await?
        .into_iter()
        .filter(|u| project.created_by != Some(u.id));

    let ranked = recommend_candidates_for_target(&project.required_skills, users, &options);
    info!(
        "Recommended {} users for project {project_id} (min {}%)",
        ranked.len(),
        options.min_percentage
    );

    Ok(Json(RecommendationResponse::new(ranked, &options)))
}
