// Bundled demo profiles
//
// Five profiles spanning beginner to advanced, used by the demo endpoints
// and as realistic fixtures in engine tests. Skill lists are stored
// pre-normalized, so these bypass the form-path validation.

use serde::Serialize;

use crate::profile::UserProfile;

/// A named demo profile with its career goal
#[derive(Debug, Clone, Serialize)]
pub struct SampleProfile {
    /// Display name of the persona
    pub name: String,

    /// What this persona wants out of a learning plan
    pub goals: String,

    /// The underlying user profile
    #[serde(flatten)]
    pub profile: UserProfile,
}

fn sample(
    name: &str,
    goals: &str,
    education: &str,
    technical_skills: &[&str],
    soft_skills: &[&str],
    target_domain: &str,
    experience_years: u32,
) -> SampleProfile {
    SampleProfile {
        name: name.to_string(),
        goals: goals.to_string(),
        profile: UserProfile {
            education: education.to_string(),
            major: String::new(),
            technical_skills: technical_skills.iter().map(|s| s.to_string()).collect(),
            soft_skills: soft_skills.iter().map(|s| s.to_string()).collect(),
            target_domain: Some(target_domain.to_string()),
            study_duration: None,
            experience_years,
        },
    }
}

/// The five bundled demo profiles, beginner to advanced
pub fn sample_profiles() -> Vec<SampleProfile> {
    vec![
        sample(
            "College Student (Beginner)",
            "Start career in data-driven business roles",
            "Bachelors in Business Administration",
            &["excel", "powerpoint", "word"],
            &["communication", "teamwork", "presentation"],
            "Business Analytics",
            0,
        ),
        sample(
            "Career Switcher (Intermediate)",
            "Transition from engineering to data science role",
            "Bachelors in Mechanical Engineering",
            &["python", "matlab", "excel", "cad"],
            &["problem solving", "project management", "analytical thinking"],
            "Data Science",
            3,
        ),
        sample(
            "IT Professional (Advanced)",
            "Advance to senior DevOps or cloud architecture roles",
            "Masters in Computer Science",
            &["python", "java", "sql", "linux", "docker", "aws"],
            &["leadership", "mentoring", "technical architecture"],
            "DevOps",
            5,
        ),
        sample(
            "Marketing Professional",
            "Become digital marketing manager or specialist",
            "Bachelors in Marketing",
            &["excel", "social media", "seo", "google analytics"],
            &["creativity", "communication", "strategy"],
            "Digital Marketing",
            2,
        ),
        sample(
            "Recent Bootcamp Grad",
            "Land first job as frontend or fullstack developer",
            "Full Stack Web Development Bootcamp",
            &["html", "css", "javascript", "react", "node.js"],
            &["teamwork", "adaptability", "quick learning"],
            "Web Development",
            1,
        ),
    ]
}

/// Look up a sample profile by its display name
pub fn find_profile<'a>(profiles: &'a [SampleProfile], name: &str) -> Option<&'a SampleProfile> {
    profiles.iter().find(|p| p.name == name)
}
