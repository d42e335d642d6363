// leconseil - Matching & Ranking Engine
//
// *Le Conseil* (The Advice) - Rule-based course recommendation for
// LeParcours: scoring, ranking, and learning-path construction

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Weighted rule-based profile/course scoring.
pub mod scoring;

/// Catalog-wide ranking.
pub mod ranking;

/// Learning-path construction.
pub mod path;

/// JSON export shape.
pub mod output;

pub use output::{export, RecommendationExport};
pub use path::{build_learning_path, LearningPath};
pub use ranking::{recommend, Recommendation, DEFAULT_TOP_N, MIN_MATCH_SCORE};
pub use scoring::{score, MatchReport, Timeline};

/// leconseil library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
