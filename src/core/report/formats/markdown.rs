//! Markdown report generator
//!
//! Renders askama templates from `templates/`. Numbers are formatted before
//! they reach a template so the templates only lay out strings.

use super::projection_rows;
use crate::core::comparison::{ComparisonCohort, WinnerCategory};
use crate::core::format::{euros, roi_percent, years};
use crate::core::models::ProjectionResult;
use crate::core::report::{ProjectionReport, ReportGenerator};
use askama::Template;
use std::error::Error;

/// One label/value line of a table or list
struct Row {
    label: String,
    value: String,
}

struct CourseRow {
    rank: usize,
    name: String,
    cost: String,
    payback: String,
    roi: String,
    salary: String,
    wins: String,
}

impl CourseRow {
    fn new(rank: usize, course: &ProjectionResult, wins: &[WinnerCategory]) -> Self {
        Self {
            rank,
            name: course.name().to_string(),
            cost: euros(course.total_cost),
            payback: years(course.payback_years),
            roi: roi_percent(course.roi_5_years),
            salary: euros(course.starting_salary),
            wins: wins
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Template)]
#[template(path = "projection.md")]
struct ProjectionTemplate {
    name: String,
    university: String,
    rows: Vec<Row>,
    recommendation: String,
    suggestion: String,
}

#[derive(Template)]
#[template(path = "comparison.md")]
struct ComparisonTemplate {
    rows: Vec<CourseRow>,
    winners: Vec<Row>,
}

#[derive(Template)]
#[template(path = "ranking.md")]
struct RankingTemplate {
    rows: Vec<CourseRow>,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render_projection(&self, report: &ProjectionReport) -> Result<String, Box<dyn Error>> {
        let result = report.projection;
        let template = ProjectionTemplate {
            name: result.name().to_string(),
            university: result.university.clone(),
            rows: projection_rows(report)
                .into_iter()
                .map(|(label, value)| Row {
                    label: label.to_string(),
                    value,
                })
                .collect(),
            recommendation: result.analysis.recommendation.clone(),
            suggestion: report
                .suggestion
                .as_ref()
                .map(|s| s.text.clone())
                .unwrap_or_default(),
        };
        Ok(template.render()?)
    }

    fn render_comparison(&self, cohort: &ComparisonCohort) -> Result<String, Box<dyn Error>> {
        let rows = cohort
            .courses
            .iter()
            .enumerate()
            .map(|(i, course)| CourseRow::new(i + 1, course, &cohort.wins_for(course.name())))
            .collect();
        let winners = WinnerCategory::ALL
            .iter()
            .filter_map(|&category| {
                cohort.winner(category).map(|winner| Row {
                    label: category.label().to_string(),
                    value: winner.to_string(),
                })
            })
            .collect();
        Ok(ComparisonTemplate { rows, winners }.render()?)
    }

    fn render_ranking(&self, courses: &[ProjectionResult]) -> Result<String, Box<dyn Error>> {
        let rows = courses
            .iter()
            .enumerate()
            .map(|(i, course)| CourseRow::new(i + 1, course, &[]))
            .collect();
        Ok(RankingTemplate { rows }.render()?)
    }
}
