//! Error classification for the projection and comparison engines

use thiserror::Error;

/// Errors raised by the engines and the catalog boundary
///
/// The engines only classify; turning these into user-facing messages is
/// left to the caller.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A numeric input would make a projection meaningless (e.g. a zero divisor)
    #[error("invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending input
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A comparison was requested with too few or too many courses
    #[error("a comparison needs between 2 and 5 courses, got {size}")]
    InvalidCohortSize {
        /// Number of courses supplied
        size: usize,
    },

    /// A filter, search or reference set produced nothing to work with
    #[error("no {what} matched")]
    NoMatch {
        /// Description of what was being looked for
        what: String,
    },

    /// A course name was not present in the catalog
    #[error("course '{name}' not found in catalog")]
    UnknownCourse {
        /// Display name that was looked up
        name: String,
    },

    /// Two catalog entries share a display name
    #[error("course '{name}' appears more than once in catalog")]
    DuplicateCourse {
        /// Repeated display name
        name: String,
    },

    /// The catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        /// Path of the catalog file
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid TOML or does not match the course schema
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] toml::de::Error),
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidInput`]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Shorthand for [`EngineError::NoMatch`]
    pub fn no_match(what: impl Into<String>) -> Self {
        Self::NoMatch { what: what.into() }
    }

    /// True for the "empty result" classification, which callers usually
    /// report differently from a computation failure
    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch { .. })
    }
}

/// Result alias used throughout the engines
pub type EngineResult<T> = Result<T, EngineError>;
