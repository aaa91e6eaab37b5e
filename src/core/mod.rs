//! Core engines shared by the library and the CLI

pub mod analysis;
pub mod benchmark;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod models;
pub mod projection;
pub mod report;

pub use catalog::Catalog;
pub use comparison::{compare, ComparisonCohort, WinnerCategory};
pub use error::{EngineError, EngineResult};
pub use filter::{filter_and_sort, search, top_n, FilterCriteria, SortKey, TopMetric};
pub use projection::{project, project_with, Overrides, PartTimeWork, ProjectionPolicy};

/// Returns the current version of the `course-roi` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
