//! Shared error types for the Artistly directory

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Unrecognized {field} filter value: {value}")]
    UnknownFilterValue { field: String, value: String },

    #[error("Unrecognized review status: {value}")]
    UnknownStatus { value: String },

    #[error("Invalid review decision: {value} (expected approved or rejected)")]
    InvalidDecision { value: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Seed data could not be parsed: {message}")]
    SeedParse { message: String },

    #[error("Invalid seed record {record}: {reason}")]
    InvalidSeed { record: String, reason: String },
}

impl SharedError {
    pub fn unknown_filter(field: &str, value: &str) -> Self {
        Self::UnknownFilterValue {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_config(field: &str, value: impl ToString) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_seed(record: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            record: record.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
