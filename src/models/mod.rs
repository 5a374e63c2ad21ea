//! Shapes exchanged with downstream collaborators.

pub mod submission;

pub use submission::ApplicationSubmission;
