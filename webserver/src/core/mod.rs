//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod catalog;
pub mod dashboard;
pub mod review;

// Re-export commonly used items
pub use catalog::{filter_artists, find_artist, result_label};
pub use dashboard::{ReviewSummary, summarize};
pub use review::{ReviewError, filter_submissions, transition_status, transition_status_with_policy};
