// JSON export shape
//
// The export is the fixed contract consumed by the form page and any
// downstream tooling; building it is pure and total.

use serde::{Deserialize, Serialize};

use crate::path::LearningPath;
use crate::ranking::Recommendation;
use crate::scoring::Timeline;

/// One recommended course in the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedCourse {
    /// Course title
    pub course_title: String,

    /// Offering provider
    pub provider: String,

    /// Match score, 0-100
    pub match_score: u8,

    /// Rationale for the score
    pub justification: String,

    /// Timeline bucket label
    pub timeline: Timeline,

    /// Role the course leads toward
    pub career_path: String,
}

/// One course in a timeline bucket of the export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Course title
    pub course_title: String,

    /// Why the course sits in this phase of the plan
    pub reason: String,
}

/// The three named timeline buckets of the export
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningTimeline {
    /// Next 1-3 months (at most 3 entries)
    pub short_term: Vec<TimelineEntry>,

    /// Next 3-6 months (at most 2 entries)
    pub medium_term: Vec<TimelineEntry>,

    /// Next 6-12 months (at most 2 entries)
    pub long_term: Vec<TimelineEntry>,
}

/// Full JSON export: ranked recommendations plus the phased timeline
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationExport {
    /// Ranked recommendations, score descending
    pub user_recommendations: Vec<RecommendedCourse>,

    /// The phased learning timeline
    pub learning_timeline: LearningTimeline,
}

/// Build the export from ranked recommendations and their learning path
pub fn export(ranked: &[Recommendation], path: &LearningPath) -> RecommendationExport {
    RecommendationExport {
        user_recommendations: ranked.iter().map(recommended_course).collect(),
        learning_timeline: LearningTimeline {
            short_term: path.short_term_plan.iter().map(timeline_entry).collect(),
            medium_term: path.medium_term_plan.iter().map(timeline_entry).collect(),
            long_term: path.long_term_plan.iter().map(timeline_entry).collect(),
        },
    }
}

fn recommended_course(rec: &Recommendation) -> RecommendedCourse {
    RecommendedCourse {
        course_title: rec.title.clone(),
        provider: rec.provider.clone(),
        match_score: rec.match_score,
        justification: rec.justification.clone(),
        timeline: rec.timeline,
        career_path: rec.career_path.clone(),
    }
}

fn timeline_entry(rec: &Recommendation) -> TimelineEntry {
    TimelineEntry {
        course_title: rec.title.clone(),
        reason: format!(
            "Builds on current skills and leads to {} role",
            rec.career_path
        ),
    }
}
