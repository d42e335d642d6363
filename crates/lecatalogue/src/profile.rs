// User profile construction and validation
//
// Validation happens once, here, at construction time; downstream scoring
// assumes a well-formed profile and cannot fail.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Profile validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The technical skill list was empty after normalization
    #[error("please enter at least one technical skill")]
    NoTechnicalSkills,
}

/// A user's declared education, skills, and goals
///
/// Immutable once built: fields are only reachable through accessors, and
/// the only public constructors normalize and validate their input. One
/// profile lives for one recommendation request.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    /// Education level (free text, not consumed by scoring)
    pub(crate) education: String,

    /// Major / field of study (collected, not consumed by scoring)
    pub(crate) major: String,

    /// Technical skills, lowercase, deduplicated, order of first mention
    pub(crate) technical_skills: Vec<String>,

    /// Soft skills, same normalization; may be empty
    pub(crate) soft_skills: Vec<String>,

    /// Target career domain, if the user declared one
    pub(crate) target_domain: Option<String>,

    /// Preferred study duration (informational only)
    pub(crate) study_duration: Option<String>,

    /// Years of professional experience
    pub(crate) experience_years: u32,
}

impl UserProfile {
    /// Build a profile from already-split skill lists
    ///
    /// Skill entries are trimmed, lowercased, and deduplicated; empty
    /// entries are dropped. Fails if no technical skill survives.
    pub fn new(
        education: impl Into<String>,
        major: impl Into<String>,
        technical_skills: Vec<String>,
        soft_skills: Vec<String>,
        target_domain: Option<String>,
        study_duration: Option<String>,
        experience_years: u32,
    ) -> Result<Self, ProfileError> {
        let technical_skills = normalize_skills(technical_skills.iter().map(String::as_str));
        if technical_skills.is_empty() {
            return Err(ProfileError::NoTechnicalSkills);
        }
        let soft_skills = normalize_skills(soft_skills.iter().map(String::as_str));

        let profile = Self {
            education: education.into(),
            major: major.into(),
            technical_skills,
            soft_skills,
            target_domain: non_empty(target_domain),
            study_duration: non_empty(study_duration),
            experience_years,
        };
        debug!(
            "profile built: {} technical skills, target domain {:?}",
            profile.technical_skills.len(),
            profile.target_domain
        );
        Ok(profile)
    }

    /// Build a profile from the form's comma-separated skill fields
    pub fn from_form_fields(
        education: impl Into<String>,
        major: impl Into<String>,
        technical_skills: &str,
        soft_skills: &str,
        target_domain: Option<String>,
        study_duration: Option<String>,
        experience_years: u32,
    ) -> Result<Self, ProfileError> {
        Self::new(
            education,
            major,
            split_skill_list(technical_skills),
            split_skill_list(soft_skills),
            target_domain,
            study_duration,
            experience_years,
        )
    }

    /// Education level
    pub fn education(&self) -> &str {
        &self.education
    }

    /// Major / field of study
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Normalized technical skills (guaranteed non-empty)
    pub fn technical_skills(&self) -> &[String] {
        &self.technical_skills
    }

    /// Normalized soft skills
    pub fn soft_skills(&self) -> &[String] {
        &self.soft_skills
    }

    /// Declared target domain, if any
    pub fn target_domain(&self) -> Option<&str> {
        self.target_domain.as_deref()
    }

    /// Preferred study duration, if any
    pub fn study_duration(&self) -> Option<&str> {
        self.study_duration.as_deref()
    }

    /// Years of professional experience
    pub fn experience_years(&self) -> u32 {
        self.experience_years
    }

    /// Whether the profile already has a given (lowercase) skill
    pub fn has_skill(&self, skill: &str) -> bool {
        self.technical_skills.iter().any(|s| s == skill)
    }
}

/// Split a comma-separated skill field into raw entries
pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.to_string()).collect()
}

fn normalize_skills<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for entry in raw {
        let skill = entry.trim().to_lowercase();
        if !skill.is_empty() && !skills.contains(&skill) {
            skills.push(skill);
        }
    }
    skills
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_profile_from_form_fields() {
        let profile = UserProfile::from_form_fields(
            "Bachelors Degree",
            "Computer Science",
            "Python, Excel , sql",
            "communication, problem solving",
            Some("Data Science".to_string()),
            None,
            0,
        )
        .unwrap();

        assert_eq!(profile.technical_skills(), ["python", "excel", "sql"]);
        assert_eq!(profile.soft_skills(), ["communication", "problem solving"]);
        assert_eq!(profile.target_domain(), Some("Data Science"));
        assert_eq!(profile.experience_years(), 0);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(", ,")]
    fn test_empty_technical_skills_rejected(#[case] raw: &str) {
        let result = UserProfile::from_form_fields("Other", "", raw, "", None, None, 0);
        assert_eq!(result.unwrap_err(), ProfileError::NoTechnicalSkills);
    }

    #[test]
    fn test_duplicate_skills_collapse() {
        let profile = UserProfile::from_form_fields(
            "Other",
            "",
            "python, PYTHON,  python ",
            "",
            None,
            None,
            0,
        )
        .unwrap();
        assert_eq!(profile.technical_skills(), ["python"]);
    }

    #[test]
    fn test_empty_target_domain_treated_as_absent() {
        let profile = UserProfile::from_form_fields(
            "Other",
            "",
            "python",
            "",
            Some("".to_string()),
            Some("  ".to_string()),
            0,
        )
        .unwrap();
        assert_eq!(profile.target_domain(), None);
        assert_eq!(profile.study_duration(), None);
    }

    #[test]
    fn test_has_skill() {
        let profile = UserProfile::from_form_fields("Other", "", "python, sql", "", None, None, 0)
            .unwrap();
        assert!(profile.has_skill("python"));
        assert!(!profile.has_skill("java"));
    }

    #[test]
    fn test_soft_skills_may_be_empty() {
        let profile =
            UserProfile::from_form_fields("Other", "", "python", "", None, None, 2).unwrap();
        assert!(profile.soft_skills().is_empty());
    }

    #[test]
    fn test_error_message_is_user_visible() {
        let err = UserProfile::from_form_fields("Other", "", "", "", None, None, 0).unwrap_err();
        assert_eq!(err.to_string(), "please enter at least one technical skill");
    }
}
