//! End-to-end scenarios across projection, comparison and filtering

use course_roi::core::comparison::{compare, WinnerCategory};
use course_roi::core::error::EngineError;
use course_roi::core::filter::{filter_and_sort, search, top_n, FilterCriteria, SortKey, TopMetric};
use course_roi::core::models::{CourseAttributes, ProjectionResult};
use course_roi::core::projection::{project, Overrides, PartTimeWork};

fn projected(name: &str, cost: f64, net: f64) -> ProjectionResult {
    let attrs =
        CourseAttributes::new(name, cost / 4.0, 4.0, net * 1.5, net * 1.8).with_net_income(net);
    project(&attrs, &Overrides::none()).expect("projection")
}

fn computer_science_ucd() -> CourseAttributes {
    CourseAttributes::new("Computer Science - UCD", 5000.0, 4.0, 50_000.0, 70_000.0)
        .with_university("University College Dublin")
        .with_net_income(40_000.0)
}

#[test]
fn catalog_search_scenario() {
    let catalog = [
        "Computer Science - TCD",
        "Law - UCD",
        "Computer Science - UCD",
    ];
    assert_eq!(
        search(&catalog, "computer"),
        ["Computer Science - TCD", "Computer Science - UCD"]
    );
    assert!(search(&catalog, "").is_empty());
}

#[test]
fn base_projection_scenario() {
    let result = project(&computer_science_ucd(), &Overrides::none()).expect("projection");
    assert!((result.total_cost - 20_000.0).abs() < f64::EPSILON);
    assert!((result.payback_years - 0.5).abs() < f64::EPSILON);
    assert_eq!(result.university, "University College Dublin");
}

#[test]
fn part_time_scenario() {
    let overrides =
        Overrides::none().with_part_time(PartTimeWork::new(10.0, 12.0).with_weeks(30.0));
    let result = project(&computer_science_ucd(), &overrides).expect("projection");
    let adj = result.part_time.as_ref().expect("adjustment recorded");

    assert!((adj.annual_part_time_income - 3600.0).abs() < f64::EPSILON);
    assert!((adj.part_time_earnings - 14_400.0).abs() < f64::EPSILON);
    assert!((result.total_cost - 5600.0).abs() < f64::EPSILON);
    assert!((result.payback_years - 0.14).abs() < 1e-12);
}

#[test]
fn payback_is_cost_over_net_income() {
    for (hours, rate) in [(0.0, 0.0), (5.0, 11.0), (15.0, 13.5)] {
        let overrides = Overrides::none().with_part_time(PartTimeWork::new(hours, rate));
        let result = project(&computer_science_ucd(), &overrides).expect("projection");
        assert!(
            (result.payback_years - result.total_cost / result.annual_net_income).abs() < 1e-12
        );
    }
}

#[test]
fn zero_hour_part_time_is_a_no_op_on_cost() {
    let base = project(&computer_science_ucd(), &Overrides::none()).expect("projection");
    let overrides = Overrides::none().with_part_time(PartTimeWork::new(0.0, 15.0));
    let adjusted = project(&computer_science_ucd(), &overrides).expect("projection");
    assert!((adjusted.total_cost - base.total_cost).abs() < f64::EPSILON);
    assert_eq!(adjusted.roi_5_years, base.roi_5_years);
}

#[test]
fn three_course_cohort_scenario() {
    let cohort = vec![
        projected("A - UCD", 20_000.0, 16_000.0),
        projected("B - TCD", 15_000.0, 16_500.0),
        projected("C - DCU", 30_000.0, 18_000.0),
    ];
    assert_eq!(cohort[0].roi_5_years, Some(300.0));
    assert_eq!(cohort[1].roi_5_years, Some(450.0));
    assert_eq!(cohort[2].roi_5_years, Some(200.0));

    let result = compare(&cohort).expect("comparison");
    assert_eq!(result.winner(WinnerCategory::BestRoi), Some("B - TCD"));
    assert_eq!(result.winner(WinnerCategory::LowestCost), Some("B - TCD"));
}

#[test]
fn each_winner_is_the_extremum() {
    let cohort = vec![
        projected("A - UCD", 20_000.0, 16_000.0),
        projected("B - TCD", 15_000.0, 16_500.0),
        projected("C - DCU", 30_000.0, 18_000.0),
        projected("D - UL", 12_000.0, 9_000.0),
    ];
    let result = compare(&cohort).expect("comparison");
    let find = |category| {
        let name = result.winner(category).expect("winner present");
        cohort.iter().find(|c| c.name() == name).expect("member")
    };

    let cheapest = find(WinnerCategory::LowestCost);
    assert!(cohort.iter().all(|c| cheapest.total_cost <= c.total_cost));
    let fastest = find(WinnerCategory::FastestPayback);
    assert!(cohort.iter().all(|c| fastest.payback_years <= c.payback_years));
    let best = find(WinnerCategory::BestRoi);
    assert!(cohort.iter().all(|c| best.roi_rank() >= c.roi_rank()));
    let richest = find(WinnerCategory::HighestSalary);
    assert!(cohort
        .iter()
        .all(|c| richest.starting_salary >= c.starting_salary));
}

#[test]
fn cost_tie_goes_to_first_course() {
    let cohort = vec![
        projected("First - UCD", 15_000.0, 16_000.0),
        projected("Second - TCD", 15_000.0, 17_000.0),
    ];
    let result = compare(&cohort).expect("comparison");
    assert_eq!(result.winner(WinnerCategory::LowestCost), Some("First - UCD"));
}

#[test]
fn single_course_comparison_is_rejected() {
    let cohort = vec![projected("A - UCD", 20_000.0, 16_000.0)];
    assert!(matches!(
        compare(&cohort),
        Err(EngineError::InvalidCohortSize { size: 1 })
    ));
}

#[test]
fn empty_filters_only_reorder() {
    let courses = vec![
        projected("A - UCD", 20_000.0, 16_000.0),
        projected("B - TCD", 15_000.0, 16_500.0),
        projected("C - DCU", 30_000.0, 18_000.0),
    ];
    let result = filter_and_sort(&courses, &FilterCriteria::default());
    assert_eq!(result.len(), courses.len());
    for course in &courses {
        assert!(result.iter().any(|r| r.name() == course.name()));
    }
    let names: Vec<&str> = result.iter().map(ProjectionResult::name).collect();
    assert_eq!(names, ["B - TCD", "A - UCD", "C - DCU"]);

    // input order is untouched
    assert_eq!(courses[0].name(), "A - UCD");
}

#[test]
fn top_n_and_sort_keys_agree() {
    let courses = vec![
        projected("A - UCD", 20_000.0, 16_000.0),
        projected("B - TCD", 15_000.0, 16_500.0),
        projected("C - DCU", 30_000.0, 18_000.0),
    ];
    let top = top_n(&courses, TopMetric::Cost, 1);
    let sorted = filter_and_sort(&courses, &FilterCriteria::sorted_by(SortKey::CostAsc));
    assert_eq!(top[0].name(), sorted[0].name());
}
