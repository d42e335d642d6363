// Course record model

use serde::{Deserialize, Serialize};

/// Difficulty level of a course (and, derived, of a user)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Entry level, no prior background assumed
    Beginner,

    /// Assumes working knowledge of the fundamentals
    Intermediate,

    /// Assumes substantial prior experience
    Advanced,
}

impl Level {
    /// Lowercase wire/display form
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single course offering in the catalog
///
/// Records are immutable once the catalog is built; skill and prerequisite
/// names are stored lowercase so profile matching never re-normalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Unique course ID
    pub id: u32,

    /// Course title
    pub title: String,

    /// Offering provider (Coursera, Udemy, ...)
    pub provider: String,

    /// Display duration (e.g. "6 weeks")
    pub duration: String,

    /// Difficulty level
    pub level: Level,

    /// Display cost (e.g. "Free", "$89")
    pub cost: String,

    /// Skill names required before taking the course (lowercase)
    pub prerequisites: Vec<String>,

    /// Skill names the course teaches, in syllabus order (lowercase)
    pub skills_covered: Vec<String>,

    /// Role this course leads toward (free-text match target)
    pub career_path: String,

    /// Subject domain (free-text match target)
    pub domain: String,

    /// Course landing page link
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_as_str() {
        assert_eq!(Level::Beginner.as_str(), "beginner");
        assert_eq!(Level::Intermediate.as_str(), "intermediate");
        assert_eq!(Level::Advanced.as_str(), "advanced");
    }

    #[test]
    fn test_level_serde_lowercase() {
        let json = serde_json::to_string(&Level::Intermediate).unwrap();
        assert_eq!(json, "\"intermediate\"");

        let level: Level = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(level, Level::Advanced);
    }

    #[test]
    fn test_course_record_roundtrip() {
        let course = CourseRecord {
            id: 1,
            title: "Python for Absolute Beginners".to_string(),
            provider: "Coursera".to_string(),
            duration: "6 weeks".to_string(),
            level: Level::Beginner,
            cost: "Free".to_string(),
            prerequisites: vec![],
            skills_covered: vec!["python".to_string(), "programming basics".to_string()],
            career_path: "Software Developer".to_string(),
            domain: "Programming".to_string(),
            link: "#".to_string(),
        };

        let json = serde_json::to_string(&course).unwrap();
        let back: CourseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 1);
        assert_eq!(back.level, Level::Beginner);
        assert_eq!(back.skills_covered.len(), 2);
    }
}
