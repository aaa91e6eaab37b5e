//! Report generation for projections, comparisons and rankings
//!
//! Each output format implements [`ReportGenerator`]. Markdown goes through
//! askama templates under `templates/`, JSON through `serde_json`, and the
//! plain text format is what the CLI prints by default.

pub mod formats;

use crate::core::benchmark::{Benchmark, Suggestion};
use crate::core::comparison::ComparisonCohort;
use crate::core::models::ProjectionResult;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// A projection together with its standing in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport<'a> {
    /// The projection itself
    #[serde(flatten)]
    pub projection: &'a ProjectionResult,
    /// Comparison with the catalog averages, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<Benchmark>,
    /// Same-field alternative, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl<'a> ProjectionReport<'a> {
    /// Report on a bare projection
    #[must_use]
    pub const fn new(projection: &'a ProjectionResult) -> Self {
        Self {
            projection,
            benchmark: None,
            suggestion: None,
        }
    }

    /// Attach a benchmark
    #[must_use]
    pub fn with_benchmark(mut self, benchmark: Benchmark) -> Self {
        self.benchmark = Some(benchmark);
        self
    }

    /// Attach a suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a single projection
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render_projection(&self, report: &ProjectionReport) -> Result<String, Box<dyn Error>>;

    /// Render a comparison cohort
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render_comparison(&self, cohort: &ComparisonCohort) -> Result<String, Box<dyn Error>>;

    /// Render an ordered list of projections
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render_ranking(&self, courses: &[ProjectionResult]) -> Result<String, Box<dyn Error>>;
}

/// Generator for `format`
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

/// Write rendered report content, creating parent directories as needed
///
/// # Errors
/// Returns an error if a directory cannot be created or the file cannot be written
pub fn write_report(output_path: &Path, content: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, content)?;
    Ok(())
}
