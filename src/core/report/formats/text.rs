//! Plain text report generator for terminal output

use super::projection_rows;
use crate::core::comparison::{ComparisonCohort, WinnerCategory};
use crate::core::format::{euros, roi_percent, years};
use crate::core::models::ProjectionResult;
use crate::core::report::{ProjectionReport, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Width of the label column in projection output
const LABEL_WIDTH: usize = 22;

/// Plain text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn course_line(rank: usize, course: &ProjectionResult) -> String {
        format!(
            "{rank:>2}. {:<40} cost {:>10}  payback {:>11}  ROI {:>9}",
            course.name(),
            euros(course.total_cost),
            years(course.payback_years),
            roi_percent(course.roi_5_years)
        )
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render_projection(&self, report: &ProjectionReport) -> Result<String, Box<dyn Error>> {
        let result = report.projection;
        let mut out = String::new();

        if result.university.is_empty() {
            writeln!(out, "{}", result.name())?;
        } else {
            writeln!(out, "{} ({})", result.name(), result.university)?;
        }
        for (label, value) in projection_rows(report) {
            writeln!(
                out,
                "  {:<width$}{value}",
                format!("{label}:"),
                width = LABEL_WIDTH
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{}", result.analysis.recommendation)?;
        if let Some(suggestion) = &report.suggestion {
            writeln!(out, "{}", suggestion.text)?;
        }
        Ok(out)
    }

    fn render_comparison(&self, cohort: &ComparisonCohort) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        writeln!(out, "Comparing {} courses", cohort.courses.len())?;
        for (i, course) in cohort.courses.iter().enumerate() {
            writeln!(out, "{}", Self::course_line(i + 1, course))?;
        }
        writeln!(out)?;
        for category in WinnerCategory::ALL {
            if let Some(winner) = cohort.winner(category) {
                writeln!(out, "  {:<18}{winner}", format!("{}:", category.label()))?;
            }
        }
        Ok(out)
    }

    fn render_ranking(&self, courses: &[ProjectionResult]) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        for (i, course) in courses.iter().enumerate() {
            writeln!(out, "{}", Self::course_line(i + 1, course))?;
        }
        Ok(out)
    }
}
