//! Domain types shared by the directory services

pub mod artist;
pub mod filter;
pub mod submission;
pub mod taxonomy;

pub use artist::{Artist, ArtistId};
pub use filter::{ALL, Constraint, FilterSelection, StatusFilter};
pub use submission::{Decision, ReviewStatus, Submission, SubmissionId};
pub use taxonomy::{CategoryOption, Taxonomy, parse_status_filter};
