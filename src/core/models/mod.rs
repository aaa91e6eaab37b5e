//! Data models for `CourseRoi`

pub mod course;
pub mod projection;

pub use course::{CourseAttributes, CourseName, ExtendedMetrics, SalaryRange};
pub use projection::{PartTimeAdjustment, ProjectionResult};
