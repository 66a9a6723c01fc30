pub mod jobs;
pub mod session;
