// Learning-path construction

use serde::{Deserialize, Serialize};

use crate::ranking::Recommendation;
use crate::scoring::Timeline;

/// Cap on the short-term plan
pub const SHORT_TERM_CAP: usize = 3;

/// Cap on the medium-term plan
pub const MEDIUM_TERM_CAP: usize = 2;

/// Cap on the long-term plan
pub const LONG_TERM_CAP: usize = 2;

/// Ranked recommendations partitioned into a phased plan
///
/// Each bucket preserves rank order (score descending) and may be empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningPath {
    /// Courses to take in the next 1-3 months (at most 3)
    pub short_term_plan: Vec<Recommendation>,

    /// Courses to take in the next 3-6 months (at most 2)
    pub medium_term_plan: Vec<Recommendation>,

    /// Courses to take in the next 6-12 months (at most 2)
    pub long_term_plan: Vec<Recommendation>,
}

/// Partition ranked recommendations into the phased plan
///
/// Single pass over the ranked list; each recommendation lands in the
/// bucket named by its timeline until that bucket is full.
pub fn build_learning_path(ranked: &[Recommendation]) -> LearningPath {
    let mut path = LearningPath::default();

    for rec in ranked {
        let (bucket, cap) = match rec.timeline {
            Timeline::ShortTerm => (&mut path.short_term_plan, SHORT_TERM_CAP),
            Timeline::MediumTerm => (&mut path.medium_term_plan, MEDIUM_TERM_CAP),
            Timeline::LongTerm => (&mut path.long_term_plan, LONG_TERM_CAP),
        };
        if bucket.len() < cap {
            bucket.push(rec.clone());
        }
    }

    path
}
