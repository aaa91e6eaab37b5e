//! Projection result model

use super::course::{CourseName, ExtendedMetrics};
use crate::core::analysis::Analysis;
use serde::{Deserialize, Serialize};

/// Record of a part-time income adjustment applied to a projection
///
/// Keeps the pre-adjustment figures so a display layer can show the delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartTimeAdjustment {
    /// Hours worked per week during term
    pub hours_per_week: f64,
    /// Hourly rate
    pub hourly_rate: f64,
    /// Working weeks per academic year
    pub weeks_per_year: f64,
    /// Income from one academic year of part-time work
    pub annual_part_time_income: f64,
    /// Income over the whole course
    pub part_time_earnings: f64,
    /// Total cost before the adjustment
    pub original_cost: f64,
    /// Payback period before the adjustment
    pub original_payback: f64,
}

/// Derived financial outcome of one course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Display name of the course
    pub course_name: CourseName,
    /// Full university name
    pub university: String,
    /// Course length in years
    pub course_length: f64,
    /// Annual tuition used for this projection (after any override)
    pub tuition_per_year: f64,
    /// Total cost, net of part-time earnings, never negative
    pub total_cost: f64,
    /// Gross starting salary
    pub starting_salary: f64,
    /// Gross salary after five years
    pub salary_after_5_years: f64,
    /// Net annual income
    pub annual_net_income: f64,
    /// Years of net income needed to cover `total_cost`
    pub payback_years: f64,
    /// 5-year ROI percentage; `None` when `total_cost` is zero
    pub roi_5_years: Option<f64>,
    /// Salary growth over five years, in percent
    pub salary_growth_pct: f64,
    /// Ratings and lifetime summary
    pub analysis: Analysis,
    /// Descriptive metrics carried through from the course attributes
    #[serde(default)]
    pub extended: ExtendedMetrics,
    /// Present when a part-time income override was applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_time: Option<PartTimeAdjustment>,
}

impl ProjectionResult {
    /// Display name as a string slice
    #[must_use]
    pub fn name(&self) -> &str {
        self.course_name.as_str()
    }

    /// Field of study
    #[must_use]
    pub fn field(&self) -> &str {
        self.course_name.field()
    }

    /// ROI used for ordering: an unbounded ROI ranks above every finite one
    #[must_use]
    pub fn roi_rank(&self) -> f64 {
        self.roi_5_years.unwrap_or(f64::INFINITY)
    }

    /// Total cost before any part-time adjustment
    #[must_use]
    pub fn original_cost(&self) -> f64 {
        self.part_time
            .as_ref()
            .map_or(self.total_cost, |adj| adj.original_cost)
    }

    /// Payback period before any part-time adjustment
    #[must_use]
    pub fn original_payback(&self) -> f64 {
        self.part_time
            .as_ref()
            .map_or(self.payback_years, |adj| adj.original_payback)
    }
}
