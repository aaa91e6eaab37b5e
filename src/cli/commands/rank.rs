//! Rank command handler

use super::{emit, load_catalog};
use course_roi::config::Config;
use course_roi::core::filter::{filter_and_sort_checked, FilterCriteria};
use course_roi::core::report::{reporter_for, ReportFormat};
use course_roi::{error, info};
use std::path::Path;

/// Run the rank command.
///
/// # Arguments
/// * `criteria` - University and field filters plus sort order
/// * `top` - Optional limit on the number of courses shown
/// * `format` - Output format
/// * `output` - Optional report file
/// * `config` - Configuration with catalog path and projection policy
pub fn run(
    criteria: &FilterCriteria,
    top: Option<usize>,
    format: ReportFormat,
    output: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = rank(criteria, top, format, output, config) {
        error!("Ranking failed: {err}");
        eprintln!("{err}");
    }
}

fn rank(
    criteria: &FilterCriteria,
    top: Option<usize>,
    format: ReportFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let catalog = load_catalog(config)?;
    let policy = config.projection.policy();

    let projections = catalog.projections_in_order(&policy);
    let mut ranked =
        filter_and_sort_checked(&projections, criteria).map_err(|e| format!("✗ {e}"))?;
    if let Some(n) = top {
        ranked.truncate(n);
    }
    info!(
        "Ranked {} of {} courses by {}",
        ranked.len(),
        projections.len(),
        criteria.sort_by
    );

    let content = reporter_for(format)
        .render_ranking(&ranked)
        .map_err(|e| format!("✗ Failed to render report: {e}"))?;
    emit(&content, output, config)
}
