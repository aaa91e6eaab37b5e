//! Side-by-side comparison of a small cohort of projections

use crate::core::error::{EngineError, EngineResult};
use crate::core::models::ProjectionResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Smallest cohort that can be compared
pub const MIN_COHORT_SIZE: usize = 2;
/// Largest cohort that can be compared
pub const MAX_COHORT_SIZE: usize = 5;

/// Metric a course can win in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinnerCategory {
    /// Highest 5-year ROI
    BestRoi,
    /// Shortest payback period
    FastestPayback,
    /// Lowest total cost
    LowestCost,
    /// Highest starting salary
    HighestSalary,
}

impl WinnerCategory {
    /// Every category, in display order
    pub const ALL: [Self; 4] = [
        Self::BestRoi,
        Self::FastestPayback,
        Self::LowestCost,
        Self::HighestSalary,
    ];

    /// Machine-readable key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::BestRoi => "best_roi",
            Self::FastestPayback => "fastest_payback",
            Self::LowestCost => "lowest_cost",
            Self::HighestSalary => "highest_salary",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BestRoi => "Best ROI",
            Self::FastestPayback => "Fastest Payback",
            Self::LowestCost => "Lowest Cost",
            Self::HighestSalary => "Highest Salary",
        }
    }

    /// True when `candidate` strictly beats `current` in this category
    fn beats(self, candidate: &ProjectionResult, current: &ProjectionResult) -> bool {
        match self {
            Self::BestRoi => candidate.roi_rank() > current.roi_rank(),
            Self::FastestPayback => candidate.payback_years < current.payback_years,
            Self::LowestCost => candidate.total_cost < current.total_cost,
            Self::HighestSalary => candidate.starting_salary > current.starting_salary,
        }
    }
}

impl fmt::Display for WinnerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A compared cohort and the winner of each category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCohort {
    /// Projections in input order
    pub courses: Vec<ProjectionResult>,
    /// Display name of the winner per category
    pub winners: BTreeMap<WinnerCategory, String>,
}

impl ComparisonCohort {
    /// Winner of `category`
    #[must_use]
    pub fn winner(&self, category: WinnerCategory) -> Option<&str> {
        self.winners.get(&category).map(String::as_str)
    }

    /// Categories won by the course named `name`
    #[must_use]
    pub fn wins_for(&self, name: &str) -> Vec<WinnerCategory> {
        self.winners
            .iter()
            .filter(|(_, winner)| winner.as_str() == name)
            .map(|(category, _)| *category)
            .collect()
    }
}

/// Compare 2 to 5 projections and pick a winner per category
///
/// Ties go to the course that appears first in `courses`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidCohortSize`] when fewer than two or more
/// than five courses are supplied.
pub fn compare(courses: &[ProjectionResult]) -> EngineResult<ComparisonCohort> {
    if !(MIN_COHORT_SIZE..=MAX_COHORT_SIZE).contains(&courses.len()) {
        return Err(EngineError::InvalidCohortSize {
            size: courses.len(),
        });
    }

    let winners = WinnerCategory::ALL
        .iter()
        .filter_map(|&category| {
            let best = courses.iter().reduce(|best, candidate| {
                if category.beats(candidate, best) {
                    candidate
                } else {
                    best
                }
            })?;
            Some((category, best.name().to_string()))
        })
        .collect();

    Ok(ComparisonCohort {
        courses: courses.to_vec(),
        winners,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseAttributes;
    use crate::core::projection::{project, Overrides};

    fn course(name: &str, cost: f64, net: f64, salary: f64) -> ProjectionResult {
        let attrs = CourseAttributes::new(name, cost / 4.0, 4.0, salary, salary * 1.4)
            .with_net_income(net);
        project(&attrs, &Overrides::none()).expect("projection")
    }

    fn cohort() -> Vec<ProjectionResult> {
        vec![
            course("A - UCD", 20_000.0, 16_000.0, 40_000.0),
            course("B - TCD", 15_000.0, 16_500.0, 38_000.0),
            course("C - DCU", 30_000.0, 18_000.0, 45_000.0),
        ]
    }

    #[test]
    fn picks_a_winner_per_category() {
        let result = compare(&cohort()).expect("comparison");
        assert_eq!(result.winner(WinnerCategory::BestRoi), Some("B - TCD"));
        assert_eq!(result.winner(WinnerCategory::LowestCost), Some("B - TCD"));
        assert_eq!(result.winner(WinnerCategory::FastestPayback), Some("B - TCD"));
        assert_eq!(result.winner(WinnerCategory::HighestSalary), Some("C - DCU"));
        assert_eq!(result.courses.len(), 3);
    }

    #[test]
    fn rejects_bad_cohort_sizes() {
        let one = vec![course("A - UCD", 20_000.0, 16_000.0, 40_000.0)];
        assert!(matches!(
            compare(&one),
            Err(EngineError::InvalidCohortSize { size: 1 })
        ));

        let six: Vec<_> = (0..6)
            .map(|i| course(&format!("Course {i} - UL"), 10_000.0, 10_000.0, 30_000.0))
            .collect();
        assert!(matches!(
            compare(&six),
            Err(EngineError::InvalidCohortSize { size: 6 })
        ));
        assert!(compare(&six[..5]).is_ok());
    }

    #[test]
    fn ties_go_to_first_course() {
        let courses = vec![
            course("First - UCD", 10_000.0, 10_000.0, 30_000.0),
            course("Second - UCD", 10_000.0, 10_000.0, 30_000.0),
        ];
        let result = compare(&courses).expect("comparison");
        for category in WinnerCategory::ALL {
            assert_eq!(result.winner(category), Some("First - UCD"));
        }
    }

    #[test]
    fn unbounded_roi_wins_best_roi() {
        let mut free = course("Free - UL", 10_000.0, 10_000.0, 30_000.0);
        free.total_cost = 0.0;
        free.roi_5_years = None;
        let courses = vec![course("Paid - UL", 10_000.0, 40_000.0, 50_000.0), free];
        let result = compare(&courses).expect("comparison");
        assert_eq!(result.winner(WinnerCategory::BestRoi), Some("Free - UL"));
        assert_eq!(result.winner(WinnerCategory::LowestCost), Some("Free - UL"));
    }

    #[test]
    fn winners_are_members_of_the_cohort() {
        let courses = cohort();
        let result = compare(&courses).expect("comparison");
        assert_eq!(result.winners.len(), WinnerCategory::ALL.len());
        for winner in result.winners.values() {
            assert!(courses.iter().any(|c| c.name() == winner));
        }
    }

    #[test]
    fn wins_for_lists_categories() {
        let result = compare(&cohort()).expect("comparison");
        assert_eq!(
            result.wins_for("B - TCD"),
            [
                WinnerCategory::BestRoi,
                WinnerCategory::FastestPayback,
                WinnerCategory::LowestCost
            ]
        );
        assert!(result.wins_for("A - UCD").is_empty());
    }

    #[test]
    fn categories_serialize_as_snake_case() {
        let json = serde_json::to_string(&WinnerCategory::FastestPayback).expect("json");
        assert_eq!(json, "\"fastest_payback\"");
        assert_eq!(WinnerCategory::HighestSalary.key(), "highest_salary");
    }
}
