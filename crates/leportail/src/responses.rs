//! API response types

use lecatalogue::{CourseRecord, SampleProfile};
use serde::Serialize;

/// One domain's share of the catalog
#[derive(Debug, Clone, Serialize)]
pub struct DomainCount {
    /// Domain name
    pub domain: String,

    /// Number of catalog courses in the domain
    pub count: usize,
}

/// Response for the catalog listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CourseCatalogResponse {
    /// All catalog courses, in catalog order
    pub courses: Vec<CourseRecord>,

    /// Total course count
    pub total: usize,

    /// Courses per domain, most populous first
    pub domains: Vec<DomainCount>,
}

impl CourseCatalogResponse {
    /// Create empty response
    pub fn empty() -> Self {
        Self {
            courses: Vec::new(),
            total: 0,
            domains: Vec::new(),
        }
    }
}

/// Response for the sample profiles endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SampleProfilesResponse {
    /// The bundled demo profiles
    pub profiles: Vec<SampleProfile>,

    /// Total profile count
    pub total: usize,
}
