//! Shared library for `CourseRoi`
//! Contains the projection, comparison and benchmark engines used by the CLI
//! and by any display layer that consumes course projections.

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
