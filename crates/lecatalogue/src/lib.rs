// lecatalogue - Course Catalog & Profiles
//
// *Le Catalogue* (The Catalog) - Embedded course records and the user
// profile model for LeParcours

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Course record model and difficulty levels.
pub mod course;

/// Embedded course catalog, loaded once per process.
pub mod catalog;

/// User profile construction and validation.
pub mod profile;

/// Bundled demo profiles.
pub mod samples;

pub use catalog::{catalog, domain_counts};
pub use course::{CourseRecord, Level};
pub use profile::{ProfileError, UserProfile};
pub use samples::{find_profile, sample_profiles, SampleProfile};

/// lecatalogue library initialization
pub fn init() {
    let _ = tracing::subscriber::set_default(tracing::subscriber::NoSubscriber::default());
}
