//! Compare command handler

use super::{emit, load_catalog};
use course_roi::config::Config;
use course_roi::core::comparison::compare;
use course_roi::core::projection::Overrides;
use course_roi::core::report::{reporter_for, ReportFormat};
use course_roi::error;
use std::path::Path;

/// Run the compare command.
///
/// Every name must be in the catalog; the cohort size is checked by the
/// comparison engine.
pub fn run(names: &[String], format: ReportFormat, output: Option<&Path>, config: &Config) {
    if let Err(err) = compare_named(names, format, output, config) {
        error!("Comparison failed: {err}");
        eprintln!("{err}");
    }
}

fn compare_named(
    names: &[String],
    format: ReportFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let catalog = load_catalog(config)?;
    let policy = config.projection.policy();

    let projections = names
        .iter()
        .map(|name| catalog.project_named(name, &Overrides::none(), &policy))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("✗ {e}"))?;

    let cohort = compare(&projections).map_err(|e| format!("✗ {e}"))?;
    let content = reporter_for(format)
        .render_comparison(&cohort)
        .map_err(|e| format!("✗ Failed to render report: {e}"))?;
    emit(&content, output, config)
}
