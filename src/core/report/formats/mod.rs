//! Report format implementations
//!
//! Provides generators for plain text, Markdown and JSON output.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use text::TextReporter;

use crate::core::benchmark::{PaybackStatus, RoiStatus};
use crate::core::format::{euros, roi_percent, years};
use crate::core::report::ProjectionReport;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Aligned plain text for the terminal
    #[default]
    Text,
    /// Markdown tables
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Label/value pairs describing a projection, shared by the text and Markdown output
pub(crate) fn projection_rows(report: &ProjectionReport) -> Vec<(&'static str, String)> {
    let result = report.projection;
    let analysis = &result.analysis;
    let mut rows = vec![
        ("Tuition per year", euros(result.tuition_per_year)),
        ("Course length", years(result.course_length)),
        ("Total cost", euros(result.total_cost)),
        ("Starting salary", euros(result.starting_salary)),
        ("Salary after 5 years", euros(result.salary_after_5_years)),
        ("Net income", format!("{} / year", euros(result.annual_net_income))),
        (
            "Payback",
            format!(
                "{} ({})",
                years(result.payback_years),
                analysis.payback_speed.label()
            ),
        ),
        (
            "5-year ROI",
            format!(
                "{} ({}, {}/5)",
                roi_percent(result.roi_5_years),
                analysis.roi_rating.label(),
                analysis.roi_rating.stars()
            ),
        ),
        ("Salary growth", format!("{:.1}%", result.salary_growth_pct)),
        (
            "Lifetime earnings",
            match analysis.lifetime.times_earned_back {
                Some(times) => format!(
                    "{} ({times:.1}x cost)",
                    euros(analysis.lifetime.total_earnings)
                ),
                None => euros(analysis.lifetime.total_earnings),
            },
        ),
    ];

    if let Some(adj) = &result.part_time {
        rows.push((
            "Part-time earnings",
            format!(
                "{} (cost was {}, payback was {})",
                euros(adj.part_time_earnings),
                euros(adj.original_cost),
                years(adj.original_payback)
            ),
        ));
    }

    if let Some(bench) = &report.benchmark {
        let roi = match (bench.roi_status, bench.roi_diff_pct) {
            (RoiStatus::Average, _) => "about average".to_string(),
            (RoiStatus::Above, Some(diff)) => format!("{diff:.0}% above average"),
            (RoiStatus::Above, None) => "above average".to_string(),
            (RoiStatus::Below, diff) => format!("{:.0}% below average", diff.unwrap_or_default()),
        };
        let payback = match bench.payback_status {
            PaybackStatus::Average => "about average".to_string(),
            PaybackStatus::Faster => format!("{:.0}% faster", bench.payback_diff_pct),
            PaybackStatus::Slower => format!("{:.0}% slower", bench.payback_diff_pct),
        };
        rows.push((
            "ROI vs catalog",
            format!("{roi} (average {:.1}%)", bench.avg_roi),
        ));
        rows.push((
            "Payback vs catalog",
            format!("{payback} (average {})", years(bench.avg_payback)),
        ));
    }

    rows
}
