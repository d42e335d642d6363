//! HTTP handlers for the form page and JSON API

use axum::{
    extract::State,
    response::Html,
    Json, Router,
};
use lecatalogue::{catalog, domain_counts, sample_profiles, CourseRecord, UserProfile};
use leconseil::{build_learning_path, export, recommend, RecommendationExport};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ApiResult;
use crate::form::FORM_PAGE;
use crate::responses::{CourseCatalogResponse, DomainCount, SampleProfilesResponse};

/// A profile submission from the form
///
/// Skill fields arrive as the form's comma-separated strings; normalization
/// and validation happen in `UserProfile` construction.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSubmission {
    /// Education level
    pub education: String,

    /// Major / field of study
    #[serde(default)]
    pub major: String,

    /// Comma-separated technical skills (required, must yield >= 1 entry)
    pub technical_skills: String,

    /// Comma-separated soft skills (may be empty)
    #[serde(default)]
    pub soft_skills: String,

    /// Target career domain, empty treated as absent
    #[serde(default)]
    pub target_domain: Option<String>,

    /// Preferred study duration (informational only)
    #[serde(default)]
    pub study_duration: Option<String>,

    /// Years of professional experience
    #[serde(default)]
    pub experience_years: Option<u32>,
}

/// State shared across all handlers
///
/// The catalog is immutable static data shared by reference; no locking is
/// needed for concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// The course catalog, loaded once per process
    pub catalog: &'static [CourseRecord],

    /// Immutable server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new AppState instance over the embedded catalog
    pub fn new(config: ServerConfig) -> Self {
        Self {
            catalog: catalog(),
            config: Arc::new(config),
        }
    }
}

/// GET / - Profile form page
pub async fn index() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// POST /api/recommendations - Score the catalog against a submitted profile
pub async fn get_recommendations(
    State(state): State<AppState>,
    Json(submission): Json<ProfileSubmission>,
) -> ApiResult<Json<RecommendationExport>> {
    let profile = UserProfile::from_form_fields(
        submission.education,
        submission.major,
        &submission.technical_skills,
        &submission.soft_skills,
        submission.target_domain,
        submission.study_duration,
        submission.experience_years.unwrap_or(0),
    )?;

    let ranked = recommend(&profile, state.catalog, state.config.top_n);
    let path = build_learning_path(&ranked);

    info!(
        "recommendations generated: {} ranked, plan {}/{}/{}",
        ranked.len(),
        path.short_term_plan.len(),
        path.medium_term_plan.len(),
        path.long_term_plan.len()
    );

    Ok(Json(export(&ranked, &path)))
}

/// GET /api/courses - Catalog listing with per-domain counts
pub async fn list_courses(State(state): State<AppState>) -> ApiResult<Json<CourseCatalogResponse>> {
    info!("listing course catalog");
    let response = CourseCatalogResponse {
        courses: state.catalog.to_vec(),
        total: state.catalog.len(),
        domains: domain_counts()
            .into_iter()
            .map(|(domain, count)| DomainCount { domain, count })
            .collect(),
    };
    Ok(Json(response))
}

/// GET /api/profiles - Bundled demo profiles
pub async fn list_sample_profiles(
    State(_state): State<AppState>,
) -> ApiResult<Json<SampleProfilesResponse>> {
    info!("listing sample profiles");
    let profiles = sample_profiles();
    let total = profiles.len();
    Ok(Json(SampleProfilesResponse { profiles, total }))
}

/// GET /api/health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<serde_json::Value>> {
    Ok(Json(serde_json::json!({
        "status": "ok",
        "service": "leportail",
        "version": env!("CARGO_PKG_VERSION"),
        "catalog_size": state.catalog.len(),
    })))
}

/// Create router with all endpoints
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(index))
        .route("/api/health", axum::routing::get(health_check))
        .route("/api/courses", axum::routing::get(list_courses))
        .route("/api/profiles", axum::routing::get(list_sample_profiles))
        .route("/api/recommendations", axum::routing::post(get_recommendations))
}
