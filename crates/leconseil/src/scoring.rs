// Weighted rule-based profile/course matching

use lecatalogue::{CourseRecord, Level, UserProfile};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Maximum points from the skill-overlap component
pub const SKILL_OVERLAP_WEIGHT: f64 = 40.0;

/// Points added when the target domain matches the course
pub const DOMAIN_BONUS: u32 = 15;

/// When a course is advisable relative to the user's current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeline {
    /// Take within the next 1-3 months
    ShortTerm,

    /// Take within the next 3-6 months
    MediumTerm,

    /// Take within the next 6-12 months
    LongTerm,
}

impl Timeline {
    /// Kebab-case wire/display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::ShortTerm => "short-term",
            Timeline::MediumTerm => "medium-term",
            Timeline::LongTerm => "long-term",
        }
    }
}

impl std::fmt::Display for Timeline {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one course against one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Match score, clamped to 0-100
    pub score: u8,

    /// Human-readable rationale for the score
    pub justification: String,

    /// When the course fits the user's learning plan
    pub timeline: Timeline,
}

/// Score a course against a profile
///
/// Four additive components: skill overlap (0-40), level fit (0-25),
/// prerequisite satisfaction (5-20), and domain alignment (0 or 15). The
/// sum is floored to an integer and clamped to 100. Deterministic and
/// total for any validated profile.
pub fn score(profile: &UserProfile, course: &CourseRecord) -> MatchReport {
    let user = user_level(profile);

    let overlap = skill_overlap_points(profile, course);
    let level = level_points(user, course.level);
    let missing = missing_prerequisites(profile, course);
    let prereq = prerequisite_points(missing.len());
    let domain = domain_points(profile, course);

    let total = overlap + f64::from(level + prereq + domain);
    let score = (total as u32).min(100) as u8;

    let matching = matching_skill_count(profile, course);
    let new_skills = new_skill_count(profile, course);

    MatchReport {
        score,
        justification: justification(matching, new_skills, &missing, score),
        timeline: timeline_for(user, course.level),
    }
}

/// Derive the user's level from skill count and experience
///
/// Fewer than 4 skills or under a year of experience reads as beginner;
/// fewer than 7 skills or under three years as intermediate.
pub fn user_level(profile: &UserProfile) -> Level {
    let skills = profile.technical_skills().len();
    let experience = profile.experience_years();

    if skills <= 3 || experience < 1 {
        Level::Beginner
    } else if skills <= 6 || experience < 3 {
        Level::Intermediate
    } else {
        Level::Advanced
    }
}

/// Level-fit points for a (user level, course level) pair
///
/// Explicit table rather than distance arithmetic so each pairing stays
/// independently testable.
pub fn level_points(user: Level, course: Level) -> u32 {
    use Level::*;
    match (user, course) {
        (Beginner, Beginner) => 25,
        (Beginner, Intermediate) => 15,
        (Beginner, Advanced) => 5,
        (Intermediate, Beginner) => 10,
        (Intermediate, Intermediate) => 25,
        (Intermediate, Advanced) => 20,
        (Advanced, Beginner) => 5,
        (Advanced, Intermediate) => 15,
        (Advanced, Advanced) => 25,
    }
}

/// Prerequisites of `course` the user does not yet have, in course order
pub fn missing_prerequisites<'a>(
    profile: &UserProfile,
    course: &'a CourseRecord,
) -> Vec<&'a str> {
    course
        .prerequisites
        .iter()
        .map(String::as_str)
        .filter(|&p| !profile.has_skill(p))
        .collect()
}

/// Timeline bucket for a (user level, course level) pair
///
/// Courses at the user's level come first; one step up is medium-term;
/// anything else (stepping down, or a two-level jump) is long-term.
pub fn timeline_for(user: Level, course: Level) -> Timeline {
    use Level::*;
    if user == course {
        Timeline::ShortTerm
    } else if matches!((user, course), (Beginner, Intermediate) | (Intermediate, Advanced)) {
        Timeline::MediumTerm
    } else {
        Timeline::LongTerm
    }
}

fn skill_overlap_points(profile: &UserProfile, course: &CourseRecord) -> f64 {
    let matching = matching_skill_count(profile, course);
    let total = course.skills_covered.len().max(1);
    (matching as f64 / total as f64) * SKILL_OVERLAP_WEIGHT
}

fn matching_skill_count(profile: &UserProfile, course: &CourseRecord) -> usize {
    course_skill_set(course)
        .iter()
        .filter(|&&s| profile.has_skill(s))
        .count()
}

fn new_skill_count(profile: &UserProfile, course: &CourseRecord) -> usize {
    course_skill_set(course)
        .iter()
        .filter(|&&s| !profile.has_skill(s))
        .count()
}

fn course_skill_set(course: &CourseRecord) -> HashSet<&str> {
    course.skills_covered.iter().map(String::as_str).collect()
}

fn prerequisite_points(missing: usize) -> u32 {
    match missing {
        0 => 20,
        1 => 15,
        2 => 10,
        _ => 5,
    }
}

fn domain_points(profile: &UserProfile, course: &CourseRecord) -> u32 {
    match profile.target_domain() {
        Some(target) => {
            let target = target.to_lowercase();
            if course.domain.to_lowercase().contains(&target)
                || course.career_path.to_lowercase().contains(&target)
            {
                DOMAIN_BONUS
            } else {
                0
            }
        }
        None => 0,
    }
}

// Score-band thresholds for justification wording
const EXCELLENT_BAND: u8 = 80;
const STRONG_BAND: u8 = 60;
const GOOD_BAND: u8 = 40;

fn justification(matching: usize, new_skills: usize, missing: &[&str], score: u8) -> String {
    if score >= EXCELLENT_BAND {
        format!(
            "Excellent fit: you already have {} of the skills covered and will add {} new ones to your toolkit.",
            matching, new_skills
        )
    } else if score >= STRONG_BAND {
        format!(
            "Strong match: builds on {} of your existing skills while introducing {} new technologies.",
            matching, new_skills
        )
    } else if score >= GOOD_BAND {
        if missing.is_empty() {
            format!(
                "Solid option: expands your skillset with {} new technologies.",
                new_skills
            )
        } else {
            format!(
                "Good potential: teaches {} new skills; consider brushing up on {} first.",
                new_skills,
                missing[..missing.len().min(2)].join(", ")
            )
        }
    } else {
        format!(
            "Learning opportunity: start with the prerequisites, then take on {} new skills.",
            new_skills
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lecatalogue::catalog;
    use rstest::rstest;

    fn profile(skills: &str, experience: u32, target: Option<&str>) -> UserProfile {
        UserProfile::from_form_fields(
            "Bachelors Degree",
            "Computer Science",
            skills,
            "",
            target.map(String::from),
            None,
            experience,
        )
        .unwrap()
    }

    fn course_fixture() -> CourseRecord {
        // Mirrors "Data Science Foundations" from the catalog
        catalog().iter().find(|c| c.id == 4).unwrap().clone()
    }

    #[rstest]
    #[case("python, excel, sql", 0, Level::Beginner)]
    #[case("python, excel, sql", 10, Level::Beginner)] // 3 skills caps at beginner
    #[case("python, excel, sql, git", 0, Level::Beginner)] // no experience caps at beginner
    #[case("python, excel, sql, git", 1, Level::Intermediate)]
    #[case("a, b, c, d, e, f", 5, Level::Intermediate)] // 6 skills caps at intermediate
    #[case("a, b, c, d, e, f, g", 2, Level::Intermediate)] // under 3 years caps at intermediate
    #[case("a, b, c, d, e, f, g", 3, Level::Advanced)]
    fn test_user_level_boundaries(
        #[case] skills: &str,
        #[case] experience: u32,
        #[case] expected: Level,
    ) {
        assert_eq!(user_level(&profile(skills, experience, None)), expected);
    }

    #[rstest]
    #[case(Level::Beginner, Level::Beginner, 25)]
    #[case(Level::Beginner, Level::Intermediate, 15)]
    #[case(Level::Beginner, Level::Advanced, 5)]
    #[case(Level::Intermediate, Level::Beginner, 10)]
    #[case(Level::Intermediate, Level::Intermediate, 25)]
    #[case(Level::Intermediate, Level::Advanced, 20)]
    #[case(Level::Advanced, Level::Beginner, 5)]
    #[case(Level::Advanced, Level::Intermediate, 15)]
    #[case(Level::Advanced, Level::Advanced, 25)]
    fn test_level_matrix(#[case] user: Level, #[case] course: Level, #[case] expected: u32) {
        assert_eq!(level_points(user, course), expected);
    }

    #[rstest]
    #[case(Level::Beginner, Level::Beginner, Timeline::ShortTerm)]
    #[case(Level::Intermediate, Level::Intermediate, Timeline::ShortTerm)]
    #[case(Level::Advanced, Level::Advanced, Timeline::ShortTerm)]
    #[case(Level::Beginner, Level::Intermediate, Timeline::MediumTerm)]
    #[case(Level::Intermediate, Level::Advanced, Timeline::MediumTerm)]
    #[case(Level::Beginner, Level::Advanced, Timeline::LongTerm)]
    #[case(Level::Intermediate, Level::Beginner, Timeline::LongTerm)]
    #[case(Level::Advanced, Level::Beginner, Timeline::LongTerm)]
    #[case(Level::Advanced, Level::Intermediate, Timeline::LongTerm)]
    fn test_timeline_pairs(
        #[case] user: Level,
        #[case] course: Level,
        #[case] expected: Timeline,
    ) {
        assert_eq!(timeline_for(user, course), expected);
    }

    #[test]
    fn test_worked_example_scores_forty() {
        // beginner (3 skills, 0 years) against an intermediate course that
        // covers 4 skills of which 1 is known: 10 + 15 + 15 + 0 = 40
        let profile = profile("python, excel, sql", 0, None);
        let course = course_fixture();

        let report = score(&profile, &course);
        assert_eq!(report.score, 40);
        assert_eq!(report.timeline, Timeline::MediumTerm);
        // 40 lands in the good-potential band and names the one missing
        // prerequisite
        assert!(report.justification.starts_with("Good potential"));
        assert!(report.justification.contains("statistics"));
        assert!(!report.justification.contains("python"));
    }

    #[test]
    fn test_equal_levels_full_level_points_and_short_term() {
        let profile = profile("a, b, c, d, e, f, g", 5, None); // advanced
        assert_eq!(user_level(&profile), Level::Advanced);
        assert_eq!(level_points(Level::Advanced, Level::Advanced), 25);
        assert_eq!(
            timeline_for(Level::Advanced, Level::Advanced),
            Timeline::ShortTerm
        );
    }

    #[test]
    fn test_domain_match_is_case_insensitive() {
        let course = course_fixture(); // domain "Data Science"
        let with_target = profile("python, excel, sql", 0, Some("data science"));
        let without_target = profile("python, excel, sql", 0, None);

        let boost = score(&with_target, &course).score - score(&without_target, &course).score;
        assert_eq!(u32::from(boost), DOMAIN_BONUS);
    }

    #[test]
    fn test_domain_match_covers_career_path() {
        // "ML Engineer" career path matches a target of "engineer"
        let course = catalog().iter().find(|c| c.id == 6).unwrap().clone();
        let with_target = profile("java", 0, Some("Engineer"));
        let without_target = profile("java", 0, None);

        assert_eq!(
            score(&with_target, &course).score - score(&without_target, &course).score,
            15
        );
    }

    #[rstest]
    #[case(0, 20)]
    #[case(1, 15)]
    #[case(2, 10)]
    #[case(3, 5)]
    #[case(7, 5)]
    fn test_prerequisite_points(#[case] missing: usize, #[case] expected: u32) {
        assert_eq!(prerequisite_points(missing), expected);
    }

    #[test]
    fn test_missing_prerequisites_keep_course_order() {
        let course = catalog().iter().find(|c| c.id == 6).unwrap().clone();
        let profile = profile("java", 0, None);
        assert_eq!(
            missing_prerequisites(&profile, &course),
            vec!["python", "linear algebra", "statistics"]
        );
    }

    #[test]
    fn test_score_bounds_across_catalog() {
        let profiles = [
            profile("python", 0, None),
            profile("python, sql, excel, java, linux, docker, aws", 10, Some("DevOps")),
            profile("underwater basket weaving", 0, Some("Nonexistent Domain")),
        ];
        for p in &profiles {
            for course in catalog() {
                let report = score(p, course);
                assert!(report.score <= 100);
            }
        }
    }

    #[test]
    fn test_score_is_deterministic() {
        let p = profile("python, excel, sql", 0, Some("Data Science"));
        for course in catalog() {
            let a = score(&p, course);
            let b = score(&p, course);
            assert_eq!(a.score, b.score);
            assert_eq!(a.justification, b.justification);
            assert_eq!(a.timeline, b.timeline);
        }
    }

    #[test]
    fn test_disjoint_skills_still_score() {
        // A profile sharing nothing with the course is valid, just low
        let p = profile("knitting", 0, None);
        let course = course_fixture();
        let report = score(&p, &course);
        assert!(report.score < GOOD_BAND);
        assert!(report.justification.starts_with("Learning opportunity"));
    }

    #[test]
    fn test_timeline_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Timeline::ShortTerm).unwrap(),
            "\"short-term\""
        );
        let t: Timeline = serde_json::from_str("\"medium-term\"").unwrap();
        assert_eq!(t, Timeline::MediumTerm);
    }
}
