//! Projection engine: turns one course's attributes into cost, payback and ROI
//!
//! Every figure is derived here, so this module is the single source of
//! truth for the ROI arithmetic. All divisions are guarded up front; a
//! projection either succeeds with finite numbers or fails with
//! [`EngineError::InvalidInput`].

use crate::core::analysis::{analyze, round_to, LifetimeSummary};
use crate::core::error::{EngineError, EngineResult};
use crate::core::models::{CourseAttributes, PartTimeAdjustment, ProjectionResult};
use crate::debug;

/// Effective tax rate applied to a starting salary when no net income is supplied
pub const DEFAULT_TAX_RATE: f64 = 0.25;

/// Part-time working weeks per academic year (holidays and exam periods excluded)
pub const DEFAULT_WEEKS_PER_YEAR: f64 = 30.0;

/// Nominal career length for lifetime earnings
pub const DEFAULT_CAREER_YEARS: f64 = 30.0;

/// Horizon of the headline ROI figure
pub const ROI_HORIZON_YEARS: f64 = 5.0;

/// Tunable constants of the projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionPolicy {
    /// Tax rate used to derive net income from gross starting salary
    pub tax_rate: f64,
    /// Weeks per year used when a part-time override leaves it unset
    pub weeks_per_year: f64,
    /// Career length for lifetime earnings
    pub career_years: f64,
}

impl Default for ProjectionPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            weeks_per_year: DEFAULT_WEEKS_PER_YEAR,
            career_years: DEFAULT_CAREER_YEARS,
        }
    }
}

/// Part-time work done alongside the course
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartTimeWork {
    /// Hours per week, non-negative
    pub hours_per_week: f64,
    /// Hourly rate, non-negative
    pub hourly_rate: f64,
    /// Working weeks per year; the policy default (30) when `None`
    pub weeks_per_year: Option<f64>,
}

impl PartTimeWork {
    /// Part-time work at the default number of weeks per year
    #[must_use]
    pub const fn new(hours_per_week: f64, hourly_rate: f64) -> Self {
        Self {
            hours_per_week,
            hourly_rate,
            weeks_per_year: None,
        }
    }

    /// Override the number of working weeks per year
    #[must_use]
    pub const fn with_weeks(mut self, weeks_per_year: f64) -> Self {
        self.weeks_per_year = Some(weeks_per_year);
        self
    }
}

/// Caller-supplied adjustments to a projection
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overrides {
    /// Custom annual tuition; ignored unless positive and finite
    pub tuition_per_year: Option<f64>,
    /// Part-time income that offsets the cost of the course
    pub part_time: Option<PartTimeWork>,
}

impl Overrides {
    /// No overrides
    #[must_use]
    pub const fn none() -> Self {
        Self {
            tuition_per_year: None,
            part_time: None,
        }
    }

    /// Use a custom annual tuition
    #[must_use]
    pub const fn with_tuition(mut self, tuition_per_year: f64) -> Self {
        self.tuition_per_year = Some(tuition_per_year);
        self
    }

    /// Offset the cost with part-time income
    #[must_use]
    pub const fn with_part_time(mut self, work: PartTimeWork) -> Self {
        self.part_time = Some(work);
        self
    }
}

/// Project a course with the default policy
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the course length or net
/// income is not positive, or when an input is negative or non-finite.
pub fn project(course: &CourseAttributes, overrides: &Overrides) -> EngineResult<ProjectionResult> {
    project_with(course, overrides, &ProjectionPolicy::default())
}

/// Project a course under an explicit policy
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when the course length or net
/// income is not positive, or when an input is negative or non-finite.
pub fn project_with(
    course: &CourseAttributes,
    overrides: &Overrides,
    policy: &ProjectionPolicy,
) -> EngineResult<ProjectionResult> {
    require_finite("tuition_per_year", course.tuition_per_year)?;
    require_finite("course_length", course.course_length)?;
    require_finite("starting_salary", course.starting_salary)?;
    require_finite("salary_5_years", course.salary_5_years)?;

    if course.course_length <= 0.0 {
        return Err(EngineError::invalid(
            "course_length",
            format!("must be greater than zero, got {}", course.course_length),
        ));
    }
    if course.starting_salary <= 0.0 {
        return Err(EngineError::invalid(
            "starting_salary",
            format!("must be greater than zero, got {}", course.starting_salary),
        ));
    }

    let tuition_per_year = effective_tuition(course, overrides.tuition_per_year)?;
    let annual_net_income = net_income(course, policy)?;

    let base_cost = tuition_per_year * course.course_length;
    let base_payback = base_cost / annual_net_income;

    let (total_cost, part_time) = match overrides.part_time {
        Some(work) => {
            let adjustment = part_time_adjustment(
                &work,
                course.course_length,
                base_cost,
                base_payback,
                policy,
            )?;
            let adjusted = (base_cost - adjustment.part_time_earnings).max(0.0);
            (adjusted, Some(adjustment))
        }
        None => (base_cost, None),
    };

    let payback_years = total_cost / annual_net_income;
    let roi_5_years = five_year_roi(annual_net_income, total_cost);
    let salary_growth_pct = round_to(
        (course.salary_5_years - course.starting_salary) / course.starting_salary * 100.0,
        1,
    );
    let lifetime = LifetimeSummary::new(annual_net_income * policy.career_years, total_cost);
    let analysis = analyze(payback_years, roi_5_years, course.name.field(), lifetime);

    debug!(
        "Projected '{}': cost={total_cost:.2} payback={payback_years:.2} roi={roi_5_years:?}",
        course.name
    );

    Ok(ProjectionResult {
        course_name: course.name.clone(),
        university: course.university.clone(),
        course_length: course.course_length,
        tuition_per_year,
        total_cost,
        starting_salary: course.starting_salary,
        salary_after_5_years: course.salary_5_years,
        annual_net_income,
        payback_years,
        roi_5_years,
        salary_growth_pct,
        analysis,
        extended: course.extended.clone(),
        part_time,
    })
}

/// 5-year ROI in percent, rounded to one decimal; `None` when the cost is zero
#[must_use]
pub fn five_year_roi(annual_net_income: f64, total_cost: f64) -> Option<f64> {
    (total_cost > 0.0).then(|| {
        let cumulative = annual_net_income * ROI_HORIZON_YEARS;
        round_to((cumulative - total_cost) / total_cost * 100.0, 1)
    })
}

fn require_finite(field: &'static str, value: f64) -> EngineResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EngineError::invalid(field, format!("must be a finite number, got {value}")))
    }
}

fn require_non_negative(field: &'static str, value: f64) -> EngineResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(EngineError::invalid(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}

/// Tuition to use: a positive finite override, else the course default
fn effective_tuition(course: &CourseAttributes, custom: Option<f64>) -> EngineResult<f64> {
    match custom {
        Some(value) if value.is_finite() && value > 0.0 => Ok(value),
        Some(value) => {
            debug!(
                "Ignoring tuition override {value} for '{}': must be a positive number",
                course.name
            );
            require_non_negative("tuition_per_year", course.tuition_per_year)?;
            Ok(course.tuition_per_year)
        }
        None => {
            require_non_negative("tuition_per_year", course.tuition_per_year)?;
            Ok(course.tuition_per_year)
        }
    }
}

/// Net income as supplied, or derived from the starting salary and tax rate
fn net_income(course: &CourseAttributes, policy: &ProjectionPolicy) -> EngineResult<f64> {
    let net = match course.annual_net_income {
        Some(net) => net,
        None => {
            if !(0.0..1.0).contains(&policy.tax_rate) {
                return Err(EngineError::invalid(
                    "tax_rate",
                    format!("must be in [0, 1), got {}", policy.tax_rate),
                ));
            }
            course.starting_salary * (1.0 - policy.tax_rate)
        }
    };
    if !net.is_finite() || net <= 0.0 {
        return Err(EngineError::invalid(
            "annual_net_income",
            format!("must be greater than zero, got {net}"),
        ));
    }
    Ok(net)
}

fn part_time_adjustment(
    work: &PartTimeWork,
    course_length: f64,
    original_cost: f64,
    original_payback: f64,
    policy: &ProjectionPolicy,
) -> EngineResult<PartTimeAdjustment> {
    require_non_negative("hours_per_week", work.hours_per_week)?;
    require_non_negative("hourly_rate", work.hourly_rate)?;
    let weeks_per_year = work.weeks_per_year.unwrap_or(policy.weeks_per_year);
    require_non_negative("weeks_per_year", weeks_per_year)?;

    let weekly_income = work.hours_per_week * work.hourly_rate;
    let annual_part_time_income = weekly_income * weeks_per_year;
    let part_time_earnings = annual_part_time_income * course_length;

    Ok(PartTimeAdjustment {
        hours_per_week: work.hours_per_week,
        hourly_rate: work.hourly_rate,
        weeks_per_year,
        annual_part_time_income,
        part_time_earnings,
        original_cost,
        original_payback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> CourseAttributes {
        CourseAttributes::new("Computer Science - UCD", 5000.0, 4.0, 50_000.0, 70_000.0)
            .with_net_income(40_000.0)
    }

    #[test]
    fn base_projection() {
        let result = project(&course(), &Overrides::none()).expect("projection");

        assert!((result.total_cost - 20_000.0).abs() < f64::EPSILON);
        assert!((result.payback_years - 0.5).abs() < f64::EPSILON);
        // (200000 - 20000) / 20000 * 100
        assert_eq!(result.roi_5_years, Some(900.0));
        assert!((result.salary_growth_pct - 40.0).abs() < f64::EPSILON);
        assert!(result.part_time.is_none());
    }

    #[test]
    fn part_time_reduces_cost_and_payback() {
        let overrides =
            Overrides::none().with_part_time(PartTimeWork::new(10.0, 12.0).with_weeks(30.0));
        let result = project(&course(), &overrides).expect("projection");

        let adj = result.part_time.as_ref().expect("adjustment");
        assert!((adj.annual_part_time_income - 3600.0).abs() < f64::EPSILON);
        assert!((adj.part_time_earnings - 14_400.0).abs() < f64::EPSILON);
        assert!((adj.original_cost - 20_000.0).abs() < f64::EPSILON);
        assert!((adj.original_payback - 0.5).abs() < f64::EPSILON);
        assert!((result.total_cost - 5600.0).abs() < f64::EPSILON);
        assert!((result.payback_years - 0.14).abs() < 1e-12);
    }

    #[test]
    fn part_time_defaults_to_thirty_weeks() {
        let overrides = Overrides::none().with_part_time(PartTimeWork::new(10.0, 12.0));
        let result = project(&course(), &overrides).expect("projection");
        let adj = result.part_time.expect("adjustment");
        assert!((adj.weeks_per_year - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cost_is_floored_at_zero_and_roi_is_unbounded() {
        let overrides = Overrides::none().with_part_time(PartTimeWork::new(40.0, 20.0));
        let result = project(&course(), &overrides).expect("projection");

        assert!(result.total_cost.abs() < f64::EPSILON);
        assert!(result.payback_years.abs() < f64::EPSILON);
        assert!(result.roi_5_years.is_none());
        assert!(result.analysis.lifetime.times_earned_back.is_none());
        assert!((result.original_cost() - 20_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tuition_override_applies_only_when_positive() {
        let doubled = project(&course(), &Overrides::none().with_tuition(10_000.0))
            .expect("projection");
        assert!((doubled.total_cost - 40_000.0).abs() < f64::EPSILON);
        assert!((doubled.tuition_per_year - 10_000.0).abs() < f64::EPSILON);

        for ignored in [0.0, -100.0, f64::NAN] {
            let result =
                project(&course(), &Overrides::none().with_tuition(ignored)).expect("projection");
            assert!((result.total_cost - 20_000.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn derives_net_income_from_tax_rate() {
        let course = CourseAttributes::new("Law - TCD", 3000.0, 4.0, 40_000.0, 60_000.0);
        let result = project(&course, &Overrides::none()).expect("projection");
        assert!((result.annual_net_income - 30_000.0).abs() < f64::EPSILON);

        let policy = ProjectionPolicy {
            tax_rate: 0.5,
            ..ProjectionPolicy::default()
        };
        let result = project_with(&course, &Overrides::none(), &policy).expect("projection");
        assert!((result.annual_net_income - 20_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lifetime_uses_career_years() {
        let result = project(&course(), &Overrides::none()).expect("projection");
        assert!((result.analysis.lifetime.total_earnings - 1_200_000.0).abs() < f64::EPSILON);
        assert_eq!(result.analysis.lifetime.times_earned_back, Some(60.0));
    }

    #[test]
    fn rejects_non_positive_course_length() {
        let mut bad = course();
        bad.course_length = 0.0;
        let err = project(&bad, &Overrides::none()).expect_err("zero length");
        assert!(matches!(
            err,
            EngineError::InvalidInput {
                field: "course_length",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_positive_net_income() {
        let bad = course().with_net_income(0.0);
        let err = project(&bad, &Overrides::none()).expect_err("zero income");
        assert!(matches!(
            err,
            EngineError::InvalidInput {
                field: "annual_net_income",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_part_time_inputs() {
        let overrides = Overrides::none().with_part_time(PartTimeWork::new(-1.0, 12.0));
        assert!(project(&course(), &overrides).is_err());

        let overrides = Overrides::none().with_part_time(PartTimeWork::new(10.0, -12.0));
        assert!(project(&course(), &overrides).is_err());
    }

    #[test]
    fn rejects_non_finite_inputs() {
        let mut bad = course();
        bad.starting_salary = f64::INFINITY;
        assert!(project(&bad, &Overrides::none()).is_err());
    }
}
