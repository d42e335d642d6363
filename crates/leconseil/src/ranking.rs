// Catalog-wide scoring and ranking

use lecatalogue::{CourseRecord, Level, UserProfile};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

use crate::scoring::{score, Timeline};

/// Minimum score a course needs to be recommended at all
pub const MIN_MATCH_SCORE: u8 = 20;

/// Default number of recommendations returned
pub const DEFAULT_TOP_N: usize = 10;

/// A course the engine recommends for a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog ID of the course
    pub course_id: u32,

    /// Course title
    pub title: String,

    /// Offering provider
    pub provider: String,

    /// Display duration
    pub duration: String,

    /// Course difficulty level
    pub level: Level,

    /// Display cost
    pub cost: String,

    /// Match score, 20-100 for any emitted recommendation
    pub match_score: u8,

    /// Rationale for the score
    pub justification: String,

    /// When the course fits the learning plan
    pub timeline: Timeline,

    /// Role the course leads toward
    pub career_path: String,

    /// Subject domain
    pub domain: String,

    /// Skills the course teaches
    pub skills_covered: Vec<String>,

    /// Skills required beforehand
    pub prerequisites: Vec<String>,

    /// Course landing page link
    pub link: String,
}

/// Score every catalog course against a profile and rank the results
///
/// Courses scoring below [`MIN_MATCH_SCORE`] are dropped. The remainder is
/// sorted by score descending with a stable sort, so equal scores keep the
/// catalog's relative order, then truncated to `top_n`. An empty result is
/// a valid outcome, not an error.
pub fn recommend(
    profile: &UserProfile,
    catalog: &[CourseRecord],
    top_n: usize,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = Vec::new();

    for course in catalog {
        let report = score(profile, course);
        if report.score < MIN_MATCH_SCORE {
            continue;
        }

        recommendations.push(Recommendation {
            course_id: course.id,
            title: course.title.clone(),
            provider: course.provider.clone(),
            duration: course.duration.clone(),
            level: course.level,
            cost: course.cost.clone(),
            match_score: report.score,
            justification: report.justification,
            timeline: report.timeline,
            career_path: course.career_path.clone(),
            domain: course.domain.clone(),
            skills_covered: course.skills_covered.clone(),
            prerequisites: course.prerequisites.clone(),
            link: course.link.clone(),
        });
    }

    debug!(
        "scored {} courses, {} cleared the threshold",
        catalog.len(),
        recommendations.len()
    );

    // sort_by_key is stable: ties keep catalog order
    recommendations.sort_by_key(|r| Reverse(r.match_score));
    recommendations.truncate(top_n);
    recommendations
}
