//! Standing of one projection against a reference set
//!
//! The reference set is normally every projection in the catalog. Both
//! functions only read it.

use crate::core::analysis::round_to;
use crate::core::error::{EngineError, EngineResult};
use crate::core::format::euros;
use crate::core::models::ProjectionResult;
use serde::{Deserialize, Serialize};

/// ROI more than this many percent above or below average leaves the average band
pub const ROI_BAND_PCT: f64 = 20.0;
/// Payback more than this many percent faster or slower leaves the average band
pub const PAYBACK_BAND_PCT: f64 = 15.0;
/// Number of same-field courses considered for a suggestion
pub const MAX_SUGGESTION_CANDIDATES: usize = 3;

/// ROI relative to the reference average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoiStatus {
    /// More than 20% above average
    Above,
    /// More than 20% below average
    Below,
    /// Within 20% of average
    Average,
}

/// Payback relative to the reference average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackStatus {
    /// More than 15% quicker than average
    Faster,
    /// More than 15% slower than average
    Slower,
    /// Within 15% of average
    Average,
}

/// How a projection compares with the reference averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    /// Absolute ROI difference from average in whole percent; `None` for an unbounded ROI
    pub roi_diff_pct: Option<f64>,
    /// ROI band
    pub roi_status: RoiStatus,
    /// Absolute payback difference from average in whole percent
    pub payback_diff_pct: f64,
    /// Payback band
    pub payback_status: PaybackStatus,
    /// Mean bounded ROI of the reference set, one decimal
    pub avg_roi: f64,
    /// Mean payback of the reference set, one decimal
    pub avg_payback: f64,
}

/// Compare `result` with the averages of `reference`
///
/// Unbounded ROIs are left out of the ROI average. An unbounded ROI on
/// `result` itself always rates above average.
///
/// # Errors
///
/// Returns [`EngineError::NoMatch`] when `reference` is empty or has no
/// bounded ROI, and [`EngineError::InvalidInput`] when an average is zero.
#[allow(clippy::cast_precision_loss)]
pub fn benchmark(
    result: &ProjectionResult,
    reference: &[ProjectionResult],
) -> EngineResult<Benchmark> {
    if reference.is_empty() {
        return Err(EngineError::no_match("reference courses"));
    }
    let rois: Vec<f64> = reference.iter().filter_map(|c| c.roi_5_years).collect();
    if rois.is_empty() {
        return Err(EngineError::no_match("reference courses with a bounded ROI"));
    }

    let avg_roi = rois.iter().sum::<f64>() / rois.len() as f64;
    let avg_payback =
        reference.iter().map(|c| c.payback_years).sum::<f64>() / reference.len() as f64;
    if avg_roi.abs() < f64::EPSILON {
        return Err(EngineError::invalid("avg_roi", "reference average is zero"));
    }
    if avg_payback.abs() < f64::EPSILON {
        return Err(EngineError::invalid("avg_payback", "reference average is zero"));
    }

    let (roi_diff_pct, roi_status) = match result.roi_5_years {
        Some(roi) => {
            let diff = (roi - avg_roi) / avg_roi * 100.0;
            let status = if diff > ROI_BAND_PCT {
                RoiStatus::Above
            } else if diff < -ROI_BAND_PCT {
                RoiStatus::Below
            } else {
                RoiStatus::Average
            };
            (Some(diff.abs().round()), status)
        }
        None => (None, RoiStatus::Above),
    };

    let payback_diff = (avg_payback - result.payback_years) / avg_payback * 100.0;
    let payback_status = if payback_diff > PAYBACK_BAND_PCT {
        PaybackStatus::Faster
    } else if payback_diff < -PAYBACK_BAND_PCT {
        PaybackStatus::Slower
    } else {
        PaybackStatus::Average
    };

    Ok(Benchmark {
        roi_diff_pct,
        roi_status,
        payback_diff_pct: payback_diff.abs().round(),
        payback_status,
        avg_roi: round_to(avg_roi, 1),
        avg_payback: round_to(avg_payback, 1),
    })
}

/// Urgency of a suggested alternative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionPriority {
    /// Clearly better ROI
    High,
    /// Cheaper with similar ROI
    Medium,
}

/// A same-field alternative, or a note that none is better
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested course; `None` when the current course is already a top option
    pub course: Option<String>,
    /// Priority of the suggestion, if any
    pub priority: Option<SuggestionPriority>,
    /// Sentence for display
    pub text: String,
}

impl Suggestion {
    fn none() -> Self {
        Self {
            course: None,
            priority: None,
            text: "This is already one of the top options in this field.".to_string(),
        }
    }

    fn alternative(course: &str, priority: SuggestionPriority, reason: &str) -> Self {
        Self {
            course: Some(course.to_string()),
            priority: Some(priority),
            text: format!("Consider '{course}' - it {reason}"),
        }
    }
}

/// Look for a better course in the same field
///
/// Candidates are the first three other courses in `reference` whose
/// display name contains the field of `result`. The first candidate with
/// more than 110% of the current ROI, or costing under 90% with at least
/// 95% of the ROI, is suggested.
#[must_use]
pub fn suggest_alternative(
    result: &ProjectionResult,
    reference: &[ProjectionResult],
) -> Suggestion {
    let field = result.field();
    let current_roi = result.roi_rank();
    let current_cost = result.total_cost;

    reference
        .iter()
        .filter(|c| c.name().contains(field) && c.name() != result.name())
        .take(MAX_SUGGESTION_CANDIDATES)
        .find_map(|candidate| {
            if candidate.roi_rank() > current_roi * 1.1 {
                let reason = match (candidate.roi_5_years, result.roi_5_years) {
                    (Some(theirs), Some(ours)) => format!("has {:.0}% higher ROI", theirs - ours),
                    _ => "has no net cost to recover".to_string(),
                };
                Some(Suggestion::alternative(
                    candidate.name(),
                    SuggestionPriority::High,
                    &reason,
                ))
            } else if candidate.total_cost < current_cost * 0.9
                && candidate.roi_rank() > current_roi * 0.95
            {
                let reason = format!(
                    "costs {} less with similar ROI",
                    euros(current_cost - candidate.total_cost)
                );
                Some(Suggestion::alternative(
                    candidate.name(),
                    SuggestionPriority::Medium,
                    &reason,
                ))
            } else {
                None
            }
        })
        .unwrap_or_else(Suggestion::none)
}
