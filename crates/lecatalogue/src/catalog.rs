// Embedded course catalog
//
// The catalog is built once on first access and never mutated afterwards;
// every consumer shares the same static slice.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::course::{CourseRecord, Level};

static CATALOG: Lazy<Vec<CourseRecord>> = Lazy::new(|| {
    let courses = build_catalog();
    debug!("course catalog loaded: {} records", courses.len());
    courses
});

/// The full course catalog, ordered by course ID
///
/// Loaded lazily on first access; the returned slice is shared and
/// immutable for the lifetime of the process.
pub fn catalog() -> &'static [CourseRecord] {
    &CATALOG
}

/// Number of courses per domain, most populous first
///
/// Ties keep the order domains first appear in the catalog.
pub fn domain_counts() -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for course in catalog() {
        match counts.iter_mut().find(|(domain, _)| *domain == course.domain) {
            Some((_, count)) => *count += 1,
            None => counts.push((course.domain.clone(), 1)),
        }
    }
    counts.sort_by_key(|(_, count)| std::cmp::Reverse(*count));
    counts
}

fn course(
    id: u32,
    title: &str,
    provider: &str,
    duration: &str,
    level: Level,
    cost: &str,
    prerequisites: &[&str],
    skills_covered: &[&str],
    career_path: &str,
    domain: &str,
) -> CourseRecord {
    CourseRecord {
        id,
        title: title.to_string(),
        provider: provider.to_string(),
        duration: duration.to_string(),
        level,
        cost: cost.to_string(),
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        skills_covered: skills_covered.iter().map(|s| s.to_string()).collect(),
        career_path: career_path.to_string(),
        domain: domain.to_string(),
        link: "#".to_string(),
    }
}

fn build_catalog() -> Vec<CourseRecord> {
    vec![
        // Programming & Development
        course(
            1,
            "Python for Absolute Beginners",
            "Coursera",
            "6 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["python", "programming basics", "problem solving"],
            "Software Developer",
            "Programming",
        ),
        course(
            2,
            "Web Development Fundamentals",
            "freeCodeCamp",
            "8 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["html", "css", "javascript", "web development"],
            "Frontend Developer",
            "Web Development",
        ),
        course(
            3,
            "Java Programming Masterclass",
            "Udemy",
            "12 weeks",
            Level::Intermediate,
            "$89",
            &["programming basics"],
            &["java", "oop", "data structures", "algorithms"],
            "Java Developer",
            "Programming",
        ),
        // Data Science & Analytics
        course(
            4,
            "Data Science Foundations",
            "edX",
            "10 weeks",
            Level::Intermediate,
            "$99",
            &["python", "statistics"],
            &["python", "data analysis", "statistics", "machine learning"],
            "Data Scientist",
            "Data Science",
        ),
        course(
            5,
            "SQL for Data Analysis",
            "Coursera",
            "4 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["sql", "database", "data analysis"],
            "Data Analyst",
            "Data Analytics",
        ),
        course(
            6,
            "Machine Learning Specialization",
            "Coursera",
            "16 weeks",
            Level::Advanced,
            "$199",
            &["python", "linear algebra", "statistics"],
            &["machine learning", "python", "deep learning", "neural networks"],
            "ML Engineer",
            "Data Science",
        ),
        // Cloud & DevOps
        course(
            7,
            "AWS Cloud Practitioner",
            "AWS",
            "4 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["aws", "cloud computing", "devops"],
            "Cloud Engineer",
            "Cloud Computing",
        ),
        course(
            8,
            "Docker and Kubernetes",
            "Udemy",
            "8 weeks",
            Level::Intermediate,
            "$79",
            &["linux", "programming basics"],
            &["docker", "kubernetes", "containers", "devops"],
            "DevOps Engineer",
            "DevOps",
        ),
        // Business & Marketing
        course(
            9,
            "Digital Marketing Certification",
            "Google",
            "5 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["seo", "social media", "content marketing", "analytics"],
            "Digital Marketer",
            "Marketing",
        ),
        course(
            10,
            "Business Analytics",
            "Coursera",
            "9 weeks",
            Level::Intermediate,
            "$59",
            &["excel", "statistics"],
            &["excel", "sql", "tableau", "business intelligence"],
            "Business Analyst",
            "Business Analytics",
        ),
        // Design & Creative
        course(
            11,
            "UI/UX Design Principles",
            "Coursera",
            "7 weeks",
            Level::Beginner,
            "$79",
            &[],
            &["figma", "user research", "wireframing", "prototyping"],
            "UI/UX Designer",
            "Design",
        ),
        course(
            12,
            "Graphic Design Fundamentals",
            "Skillshare",
            "6 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["photoshop", "illustrator", "design principles"],
            "Graphic Designer",
            "Design",
        ),
        course(
            13,
            "React.js Development",
            "freeCodeCamp",
            "10 weeks",
            Level::Intermediate,
            "Free",
            &["javascript", "html", "css"],
            &["react", "javascript", "frontend development"],
            "React Developer",
            "Web Development",
        ),
        course(
            14,
            "Node.js Backend Development",
            "Udemy",
            "11 weeks",
            Level::Intermediate,
            "$89",
            &["javascript"],
            &["node.js", "express", "mongodb", "backend development"],
            "Backend Developer",
            "Web Development",
        ),
        course(
            15,
            "Data Visualization with Python",
            "edX",
            "7 weeks",
            Level::Intermediate,
            "$49",
            &["python"],
            &["python", "matplotlib", "seaborn", "data visualization"],
            "Data Analyst",
            "Data Analytics",
        ),
        course(
            16,
            "Cybersecurity Fundamentals",
            "Coursera",
            "8 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["cybersecurity", "network security", "encryption"],
            "Security Analyst",
            "Cybersecurity",
        ),
        course(
            17,
            "Project Management Professional",
            "Udemy",
            "12 weeks",
            Level::Intermediate,
            "$129",
            &[],
            &["project management", "leadership", "agile", "scrum"],
            "Project Manager",
            "Management",
        ),
        course(
            18,
            "Advanced Excel for Business",
            "LinkedIn Learning",
            "5 weeks",
            Level::Intermediate,
            "$39",
            &["excel basics"],
            &["excel", "pivot tables", "vlookup", "data analysis"],
            "Business Analyst",
            "Business Analytics",
        ),
        course(
            19,
            "Mobile App Development with Flutter",
            "Udemy",
            "9 weeks",
            Level::Intermediate,
            "$79",
            &["programming basics"],
            &["flutter", "dart", "mobile development", "ui design"],
            "Mobile Developer",
            "Mobile Development",
        ),
        course(
            20,
            "Content Writing Mastery",
            "Skillshare",
            "4 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["content writing", "seo", "copywriting", "blogging"],
            "Content Writer",
            "Marketing",
        ),
        course(
            21,
            "Python for Finance",
            "edX",
            "8 weeks",
            Level::Intermediate,
            "$89",
            &["python"],
            &["python", "pandas", "financial analysis", "data science"],
            "Financial Analyst",
            "Finance",
        ),
        course(
            22,
            "Social Media Marketing",
            "Coursera",
            "6 weeks",
            Level::Beginner,
            "Free",
            &[],
            &["social media", "marketing", "analytics", "content creation"],
            "Social Media Manager",
            "Marketing",
        ),
        course(
            23,
            "Linux System Administration",
            "Linux Foundation",
            "10 weeks",
            Level::Intermediate,
            "$199",
            &[],
            &["linux", "system administration", "bash", "networking"],
            "System Administrator",
            "IT Operations",
        ),
        course(
            24,
            "Artificial Intelligence Fundamentals",
            "edX",
            "12 weeks",
            Level::Advanced,
            "$149",
            &["python", "mathematics"],
            &["ai", "machine learning", "neural networks", "python"],
            "AI Engineer",
            "Artificial Intelligence",
        ),
        course(
            25,
            "Product Management Essentials",
            "Product School",
            "8 weeks",
            Level::Intermediate,
            "$299",
            &[],
            &["product management", "strategy", "user research", "roadmapping"],
            "Product Manager",
            "Product Management",
        ),
    ]
}
