//! # Report Errors
//!
//! Configuration calls on a builder never fail. Everything that can go wrong
//! surfaces when the builder is finalized, and is reported through
//! [`ReportError`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

/// A required part of the report that was missing at finalization.
///
/// Variants are declared in the order the builder checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("title is required")]
    MissingTitle,
    #[error("format is required")]
    MissingFormat,
    #[error("period is required")]
    MissingPeriod,
    #[error("at least one column is required")]
    NoColumns,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// The accumulated configuration failed validation.
    #[error("invalid report configuration: {0}")]
    ConfigurationInvalid(Violation),

    /// The builder already handed out its report.
    #[error("report builder has already been finalized")]
    AlreadyBuilt,

    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

impl ReportError {
    /// Returns the failed check when this is a validation error.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            Self::ConfigurationInvalid(violation) => Some(*violation),
            _ => None,
        }
    }
}

impl From<Violation> for ReportError {
    fn from(violation: Violation) -> Self {
        Self::ConfigurationInvalid(violation)
    }
}
