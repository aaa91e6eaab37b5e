//! JSON report generator

use crate::core::comparison::ComparisonCohort;
use crate::core::models::ProjectionResult;
use crate::core::report::{ProjectionReport, ReportGenerator};
use std::error::Error;

/// Pretty-printed JSON for display layers and scripts
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render_projection(&self, report: &ProjectionReport) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn render_comparison(&self, cohort: &ComparisonCohort) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(cohort)?)
    }

    fn render_ranking(&self, courses: &[ProjectionResult]) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string_pretty(courses)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparison::compare;
    use crate::core::models::CourseAttributes;
    use crate::core::projection::{project, Overrides};
    use serde_json::Value;

    fn course(name: &str, tuition: f64) -> ProjectionResult {
        let attrs = CourseAttributes::new(name, tuition, 4.0, 50_000.0, 70_000.0)
            .with_net_income(40_000.0);
        project(&attrs, &Overrides::none()).expect("projection")
    }

    #[test]
    fn projection_fields_are_flattened() {
        let result = course("Computer Science - UCD", 5000.0);
        let json = JsonReporter::new()
            .render_projection(&ProjectionReport::new(&result))
            .expect("render");
        let value: Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["course_name"], "Computer Science - UCD");
        assert_eq!(value["total_cost"], 20_000.0);
        assert_eq!(value["roi_5_years"], 900.0);
        assert_eq!(value["analysis"]["roi_rating"], "excellent");
        assert!(value.get("benchmark").is_none());
        assert!(value.get("part_time").is_none());
    }

    #[test]
    fn comparison_winners_are_keyed_by_category() {
        let cohort = compare(&[
            course("Computer Science - UCD", 5000.0),
            course("Computer Science - TCD", 4000.0),
        ])
        .expect("comparison");
        let json = JsonReporter::new()
            .render_comparison(&cohort)
            .expect("render");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["winners"]["lowest_cost"], "Computer Science - TCD");
        assert_eq!(value["courses"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn unbounded_roi_serializes_as_null() {
        let mut result = course("Free - UL", 5000.0);
        result.roi_5_years = None;
        let json = JsonReporter::new()
            .render_ranking(&[result])
            .expect("render");
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert!(value[0]["roi_5_years"].is_null());
    }
}
