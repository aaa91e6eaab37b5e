//! Filtering, sorting, ranking and search over course projections
//!
//! Nothing here mutates its input: every operation borrows a slice and
//! returns a fresh vector, so a caller's catalog is never reordered.

use crate::core::error::{EngineError, EngineResult};
use crate::core::models::ProjectionResult;
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Ordering applied by [`filter_and_sort`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Highest ROI first
    #[default]
    RoiDesc,
    /// Lowest ROI first
    RoiAsc,
    /// Shortest payback first
    PaybackAsc,
    /// Longest payback first
    PaybackDesc,
    /// Cheapest first
    CostAsc,
    /// Most expensive first
    CostDesc,
    /// Alphabetical by display name
    Name,
    /// Unrecognised key; leaves the order untouched
    Unknown(String),
}

impl SortKey {
    /// All recognised keys, in the order they are usually offered
    pub const KNOWN: [Self; 7] = [
        Self::RoiDesc,
        Self::RoiAsc,
        Self::PaybackAsc,
        Self::PaybackDesc,
        Self::CostAsc,
        Self::CostDesc,
        Self::Name,
    ];

    /// Parse a key such as `roi-desc`; anything unrecognised becomes [`SortKey::Unknown`]
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "roi-desc" => Self::RoiDesc,
            "roi-asc" => Self::RoiAsc,
            "payback-asc" => Self::PaybackAsc,
            "payback-desc" => Self::PaybackDesc,
            "cost-asc" => Self::CostAsc,
            "cost-desc" => Self::CostDesc,
            "name" => Self::Name,
            _ => Self::Unknown(key.to_string()),
        }
    }

    /// Compare two projections under this key; `None` for [`SortKey::Unknown`]
    fn compare(&self, a: &ProjectionResult, b: &ProjectionResult) -> Option<Ordering> {
        let ordering = match self {
            Self::RoiDesc => b.roi_rank().total_cmp(&a.roi_rank()),
            Self::RoiAsc => a.roi_rank().total_cmp(&b.roi_rank()),
            Self::PaybackAsc => a.payback_years.total_cmp(&b.payback_years),
            Self::PaybackDesc => b.payback_years.total_cmp(&a.payback_years),
            Self::CostAsc => a.total_cost.total_cmp(&b.total_cost),
            Self::CostDesc => b.total_cost.total_cmp(&a.total_cost),
            Self::Name => collate(a.name(), b.name()),
            Self::Unknown(_) => return None,
        };
        Some(ordering)
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        Self::parse(key)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Self::RoiDesc => "roi-desc",
            Self::RoiAsc => "roi-asc",
            Self::PaybackAsc => "payback-asc",
            Self::PaybackDesc => "payback-desc",
            Self::CostAsc => "cost-asc",
            Self::CostDesc => "cost-desc",
            Self::Name => "name",
            Self::Unknown(raw) => raw,
        };
        f.write_str(key)
    }
}

/// Primary collation key: decomposed, combining marks dropped, lowercased
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Accent- and case-insensitive order, then case-folded, then raw as tie-breakers
fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Filters and ordering for a course grid
///
/// Empty `universities` or `fields` lists disable that filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// University abbreviations; a course matches if its name contains `" - <abbrev>"`
    pub universities: Vec<String>,
    /// Field names, matched loosely (see [`field_matches`])
    pub fields: Vec<String>,
    /// Ordering of the result
    pub sort_by: SortKey,
}

impl FilterCriteria {
    /// Criteria that keep everything and sort by `sort_by`
    #[must_use]
    pub const fn sorted_by(sort_by: SortKey) -> Self {
        Self {
            universities: Vec::new(),
            fields: Vec::new(),
            sort_by,
        }
    }

    fn accepts(&self, course: &ProjectionResult) -> bool {
        let university_ok = self.universities.is_empty()
            || self
                .universities
                .iter()
                .any(|abbrev| course.name().contains(&format!(" - {abbrev}")));
        let field_ok = self.fields.is_empty()
            || self
                .fields
                .iter()
                .any(|wanted| field_matches(course.field(), wanted));
        university_ok && field_ok
    }
}

/// Loose field match: either string contains the other
///
/// Deliberately tolerant so naming variants such as "Engineering" and
/// "Civil Engineering" match each other.
#[must_use]
pub fn field_matches(course_field: &str, wanted: &str) -> bool {
    course_field.contains(wanted) || wanted.contains(course_field)
}

/// Sort in place under `key` (stable; [`SortKey::Unknown`] is a no-op)
pub fn sort_courses(courses: &mut [ProjectionResult], key: &SortKey) {
    if matches!(key, SortKey::Unknown(_)) {
        return;
    }
    courses.sort_by(|a, b| key.compare(a, b).unwrap_or(Ordering::Equal));
}

/// Apply the university and field filters, then sort
#[must_use]
pub fn filter_and_sort(
    courses: &[ProjectionResult],
    criteria: &FilterCriteria,
) -> Vec<ProjectionResult> {
    let mut kept: Vec<ProjectionResult> = courses
        .iter()
        .filter(|course| criteria.accepts(course))
        .cloned()
        .collect();
    sort_courses(&mut kept, &criteria.sort_by);
    kept
}

/// Like [`filter_and_sort`], but reports an emptied non-empty input as `NoMatch`
///
/// # Errors
///
/// Returns [`EngineError::NoMatch`] when `courses` is non-empty and the
/// filters remove every course.
pub fn filter_and_sort_checked(
    courses: &[ProjectionResult],
    criteria: &FilterCriteria,
) -> EngineResult<Vec<ProjectionResult>> {
    let kept = filter_and_sort(courses, criteria);
    if kept.is_empty() && !courses.is_empty() {
        return Err(EngineError::no_match("courses for the selected filters"));
    }
    Ok(kept)
}

/// Metric used by [`top_n`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMetric {
    /// Highest ROI first
    Roi,
    /// Shortest payback first
    Payback,
    /// Cheapest first
    Cost,
}

impl TopMetric {
    const fn sort_key(self) -> SortKey {
        match self {
            Self::Roi => SortKey::RoiDesc,
            Self::Payback => SortKey::PaybackAsc,
            Self::Cost => SortKey::CostAsc,
        }
    }
}

/// The best `n` courses under `metric`; all of them if `n` exceeds the count
#[must_use]
pub fn top_n(courses: &[ProjectionResult], metric: TopMetric, n: usize) -> Vec<ProjectionResult> {
    let mut ranked = courses.to_vec();
    sort_courses(&mut ranked, &metric.sort_key());
    ranked.truncate(n);
    ranked
}

/// All courses ordered by ROI, highest first
#[must_use]
pub fn rank_by_roi(courses: &[ProjectionResult]) -> Vec<ProjectionResult> {
    top_n(courses, TopMetric::Roi, courses.len())
}

/// Courses whose parsed university equals `abbrev` (case-insensitive)
#[must_use]
pub fn courses_by_university(courses: &[ProjectionResult], abbrev: &str) -> Vec<ProjectionResult> {
    courses
        .iter()
        .filter(|course| course.course_name.university().eq_ignore_ascii_case(abbrev))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over display names
///
/// The query is trimmed first. Matches keep catalog order. A blank query
/// matches nothing.
#[must_use]
pub fn search<S: AsRef<str>>(catalog: &[S], query: &str) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseAttributes;
    use crate::core::projection::{project, Overrides};

    /// Project a course whose net income is chosen so cost and ROI come out exactly
    fn course(name: &str, cost: f64, net: f64) -> ProjectionResult {
        let attrs = CourseAttributes::new(name, cost / 4.0, 4.0, net * 1.5, net * 2.0)
            .with_net_income(net);
        project(&attrs, &Overrides::none()).expect("projection")
    }

    fn grid() -> Vec<ProjectionResult> {
        vec![
            course("Computer Science - UCD", 20_000.0, 16_000.0),
            course("Civil Engineering - TCD", 15_000.0, 16_500.0),
            course("Arts - UCD", 30_000.0, 18_000.0),
            course("Engineering - DCU", 12_000.0, 10_000.0),
        ]
    }

    fn names(courses: &[ProjectionResult]) -> Vec<&str> {
        courses.iter().map(ProjectionResult::name).collect()
    }

    #[test]
    fn parses_known_and_unknown_keys() {
        assert_eq!(SortKey::parse("payback-asc"), SortKey::PaybackAsc);
        assert_eq!(SortKey::parse("NAME"), SortKey::Name);
        assert_eq!(
            SortKey::parse("popularity"),
            SortKey::Unknown("popularity".to_string())
        );
        for key in SortKey::KNOWN {
            assert_eq!(SortKey::parse(&key.to_string()), key);
        }
    }

    #[test]
    fn university_filter_matches_abbreviation_suffix() {
        let criteria = FilterCriteria {
            universities: vec!["UCD".to_string()],
            ..FilterCriteria::sorted_by(SortKey::Name)
        };
        let result = filter_and_sort(&grid(), &criteria);
        assert_eq!(names(&result), ["Arts - UCD", "Computer Science - UCD"]);
    }

    #[test]
    fn field_filter_is_bidirectional() {
        let criteria = FilterCriteria {
            fields: vec!["Engineering".to_string()],
            ..FilterCriteria::sorted_by(SortKey::CostAsc)
        };
        let result = filter_and_sort(&grid(), &criteria);
        assert_eq!(
            names(&result),
            ["Engineering - DCU", "Civil Engineering - TCD"]
        );

        // "Computer Science and Maths" contains "Computer Science"
        let criteria = FilterCriteria {
            fields: vec!["Computer Science and Maths".to_string()],
            ..FilterCriteria::default()
        };
        let result = filter_and_sort(&grid(), &criteria);
        assert_eq!(names(&result), ["Computer Science - UCD"]);
    }

    #[test]
    fn filters_combine() {
        let criteria = FilterCriteria {
            universities: vec!["TCD".to_string(), "DCU".to_string()],
            fields: vec!["Civil".to_string()],
            sort_by: SortKey::RoiDesc,
        };
        let result = filter_and_sort(&grid(), &criteria);
        assert_eq!(names(&result), ["Civil Engineering - TCD"]);
    }

    #[test]
    fn numeric_sorts() {
        let courses = grid();
        let by_cost = filter_and_sort(&courses, &FilterCriteria::sorted_by(SortKey::CostDesc));
        assert_eq!(
            names(&by_cost),
            [
                "Arts - UCD",
                "Computer Science - UCD",
                "Civil Engineering - TCD",
                "Engineering - DCU"
            ]
        );

        let by_payback =
            filter_and_sort(&courses, &FilterCriteria::sorted_by(SortKey::PaybackAsc));
        let paybacks: Vec<f64> = by_payback.iter().map(|c| c.payback_years).collect();
        assert!(paybacks.windows(2).all(|w| w[0] <= w[1]));

        let by_roi = filter_and_sort(&courses, &FilterCriteria::sorted_by(SortKey::RoiAsc));
        let rois: Vec<f64> = by_roi.iter().map(ProjectionResult::roi_rank).collect();
        assert!(rois.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn unknown_key_passes_through() {
        let courses = grid();
        let result = filter_and_sort(
            &courses,
            &FilterCriteria::sorted_by(SortKey::parse("popularity")),
        );
        assert_eq!(names(&result), names(&courses));
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let courses = vec![
            course("B - UCD", 10_000.0, 10_000.0),
            course("A - UCD", 10_000.0, 12_000.0),
            course("C - UCD", 10_000.0, 14_000.0),
        ];
        let result = filter_and_sort(&courses, &FilterCriteria::sorted_by(SortKey::CostAsc));
        assert_eq!(names(&result), ["B - UCD", "A - UCD", "C - UCD"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let courses = vec![
            course("business - UL", 10_000.0, 10_000.0),
            course("Arts - UL", 10_000.0, 10_000.0),
            course("Computing - UL", 10_000.0, 10_000.0),
        ];
        let result = filter_and_sort(&courses, &FilterCriteria::sorted_by(SortKey::Name));
        assert_eq!(names(&result), ["Arts - UL", "business - UL", "Computing - UL"]);
    }

    #[test]
    fn name_sort_folds_accents() {
        let courses = vec![
            course("Zoology - UCD", 10_000.0, 10_000.0),
            course("Éigse - NUIG", 10_000.0, 10_000.0),
            course("Finance - UL", 10_000.0, 10_000.0),
            course("Eolaíocht - NUIG", 10_000.0, 10_000.0),
        ];
        let result = filter_and_sort(&courses, &FilterCriteria::sorted_by(SortKey::Name));
        assert_eq!(
            names(&result),
            ["Éigse - NUIG", "Eolaíocht - NUIG", "Finance - UL", "Zoology - UCD"]
        );
    }

    #[test]
    fn checked_variant_reports_no_match() {
        let criteria = FilterCriteria {
            universities: vec!["MIT".to_string()],
            ..FilterCriteria::default()
        };
        let err = filter_and_sort_checked(&grid(), &criteria).expect_err("nothing matches");
        assert!(err.is_no_match());

        let empty: Vec<ProjectionResult> = Vec::new();
        assert!(filter_and_sort_checked(&empty, &criteria)
            .expect("empty input is not a miss")
            .is_empty());
    }

    #[test]
    fn top_n_truncates_and_tolerates_large_n() {
        let courses = grid();
        let cheapest = top_n(&courses, TopMetric::Cost, 2);
        assert_eq!(
            names(&cheapest),
            ["Engineering - DCU", "Civil Engineering - TCD"]
        );
        assert_eq!(top_n(&courses, TopMetric::Payback, 10).len(), courses.len());
        assert!(top_n(&courses, TopMetric::Roi, 0).is_empty());
    }

    #[test]
    fn rank_by_roi_orders_descending() {
        let ranked = rank_by_roi(&grid());
        assert!(ranked
            .windows(2)
            .all(|w| w[0].roi_rank() >= w[1].roi_rank()));
    }

    #[test]
    fn courses_by_university_uses_parsed_name() {
        let ucd = courses_by_university(&grid(), "ucd");
        assert_eq!(names(&ucd), ["Computer Science - UCD", "Arts - UCD"]);
    }

    #[test]
    fn search_is_case_insensitive_and_ordered() {
        let catalog = ["Computer Science - TCD", "Law - UCD", "Computer Science - UCD"];
        assert_eq!(
            search(&catalog, "science"),
            ["Computer Science - TCD", "Computer Science - UCD"]
        );
        assert_eq!(search(&catalog, "ucd"), ["Law - UCD", "Computer Science - UCD"]);
        assert!(search(&catalog, "").is_empty());
        assert!(search(&catalog, "Medicine").is_empty());
    }

    #[test]
    fn search_trims_the_query() {
        let catalog = ["Computer Science - TCD", "Law - UCD"];
        assert!(search(&catalog, " ").is_empty());
        assert!(search(&catalog, "\t\n").is_empty());
        assert_eq!(search(&catalog, " law "), ["Law - UCD"]);
    }
}
