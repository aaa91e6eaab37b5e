//! Project command handler
//!
//! Projects one catalog course, optionally benchmarked against the rest of
//! the catalog, and renders it in the requested format.

use super::{emit, load_catalog};
use course_roi::config::Config;
use course_roi::core::benchmark::{benchmark, suggest_alternative};
use course_roi::core::projection::Overrides;
use course_roi::core::report::{reporter_for, ProjectionReport, ReportFormat};
use course_roi::{debug, error, verbose};
use std::path::Path;

/// Run the project command.
///
/// # Arguments
/// * `name` - Course display name
/// * `overrides` - Tuition and part-time overrides
/// * `with_benchmark` - Compare against catalog averages and suggest alternatives
/// * `format` - Output format
/// * `output` - Optional report file
/// * `config` - Configuration with catalog path and projection policy
pub fn run(
    name: &str,
    overrides: &Overrides,
    with_benchmark: bool,
    format: ReportFormat,
    output: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = project(name, overrides, with_benchmark, format, output, config) {
        error!("Projection failed for '{name}': {err}");
        eprintln!("{err}");
    }
}

fn project(
    name: &str,
    overrides: &Overrides,
    with_benchmark: bool,
    format: ReportFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let catalog = load_catalog(config)?;
    let policy = config.projection.policy();

    let result = catalog
        .project_named(name, overrides, &policy)
        .map_err(|e| format!("✗ {e}"))?;
    verbose!(
        "{}: cost {:.2}, payback {:.2} years",
        result.name(),
        result.total_cost,
        result.payback_years
    );

    let mut report = ProjectionReport::new(&result);
    if with_benchmark {
        let reference = catalog.projections_in_order(&policy);
        match benchmark(&result, &reference) {
            Ok(bench) => report = report.with_benchmark(bench),
            Err(e) => debug!("No benchmark for '{name}': {e}"),
        }
        report = report.with_suggestion(suggest_alternative(&result, &reference));
    }

    let content = reporter_for(format)
        .render_projection(&report)
        .map_err(|e| format!("✗ Failed to render report: {e}"))?;
    emit(&content, output, config)
}
