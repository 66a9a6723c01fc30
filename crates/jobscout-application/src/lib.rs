//! Application layer for JobScout.
//!
//! Coordinates the domain types with the collaborator ports: the session
//! store that owns the signed-in identity, and the job search built on it.

pub mod job_search;
pub mod session;

pub use job_search::{JobListing, JobSearchError, JobSearchService};
pub use session::{SessionStore, Subscription};
