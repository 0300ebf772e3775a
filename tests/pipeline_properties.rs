mod common;

use common::names;
use employee_analytics::analytics::{
    EmployeePipeline, compare_sums, flatten_teams, sample_employees, sample_teams,
    sum_of_squares, sum_of_squares_shuffled,
};

const FULL_SUM_OF_SQUARES: u64 = 333_333_833_333_500_000;

#[test]
fn department_and_salary_filters_select_expected_records() {
    let employees = sample_employees();
    let pipeline = EmployeePipeline::new(&employees);

    let engineering = pipeline.filter_by_department("Engineering");
    assert_eq!(names(&engineering), ["Alice", "Bob", "Diana", "Grace"]);

    // Frank earns exactly 60000 and is not above the threshold.
    let high_earners = pipeline.filter_by_salary_above(60000.0);
    assert_eq!(names(&high_earners), ["Alice", "Bob", "Diana", "Grace"]);
}

#[test]
fn salary_sort_is_non_decreasing_and_name_sort_truncates() {
    let employees = sample_employees();
    let pipeline = EmployeePipeline::new(&employees);

    let by_salary = pipeline.sorted_by_salary();
    assert_eq!(by_salary.len(), 8);
    assert!(by_salary.windows(2).all(|w| w[0].salary() <= w[1].salary()));

    let last_three = pipeline.sorted_by_name_desc(Some(3));
    assert_eq!(names(&last_three), ["Henry", "Grace", "Frank"]);
}

#[test]
fn grouping_by_department_yields_three_groups() {
    let employees = sample_employees();
    let groups = EmployeePipeline::new(&employees).group_by_department();

    let sizes: Vec<(&str, usize)> = groups
        .iter()
        .map(|(department, members)| (department.as_str(), members.len()))
        .collect();
    assert_eq!(sizes, [("Engineering", 4), ("HR", 2), ("Marketing", 2)]);
}

#[test]
fn partitioning_by_age_splits_the_roster() {
    let employees = sample_employees();
    let partition = EmployeePipeline::new(&employees).partition_by_age(30);

    assert_eq!(names(&partition.matching), ["Alice", "Charlie", "Eve", "Henry"]);
    assert_eq!(names(&partition.rest), ["Bob", "Diana", "Frank", "Grace"]);
    assert_eq!(partition.matching.len() + partition.rest.len(), employees.len());
}

#[test]
fn reductions_over_the_sample_roster() {
    let employees = sample_employees();
    let pipeline = EmployeePipeline::new(&employees);

    assert_eq!(pipeline.total_salary(), 532000.0);

    let top = pipeline.highest_paid().unwrap();
    assert_eq!(top.name(), "Grace");
    assert_eq!(top.salary(), 90000.0);
}

#[test]
fn sums_of_squares_agree_across_orderings() {
    let sequential = sum_of_squares(1_000_000);
    let shuffled = sum_of_squares_shuffled(1_000_000);

    assert_eq!(sequential, Some(FULL_SUM_OF_SQUARES));
    assert_eq!(shuffled, Some(FULL_SUM_OF_SQUARES));
}

#[test]
fn parallel_sum_matches_sequential_sum() {
    let comparison = compare_sums(1_000_000, 4).unwrap();

    assert_eq!(comparison.sequential, FULL_SUM_OF_SQUARES);
    assert_eq!(comparison.parallel, FULL_SUM_OF_SQUARES);
    assert!(comparison.matches());
}

#[test]
fn flattening_teams_keeps_every_name_in_order() {
    let flattened = flatten_teams(&sample_teams());

    assert_eq!(
        flattened,
        ["Alice", "Bob", "Diana", "Grace", "Charlie", "Frank", "Eve", "Henry"]
    );
}

#[test]
fn department_report_summarises_each_group() {
    let employees = sample_employees();
    let report = EmployeePipeline::new(&employees).department_report();

    let rows: Vec<(&str, usize, f64, f64, &str)> = report
        .iter()
        .map(|s| {
            (
                s.department.as_str(),
                s.employee_count,
                s.average_salary,
                s.average_age,
                s.top_earner.as_str(),
            )
        })
        .collect();

    assert_eq!(
        rows,
        [
            ("Engineering", 4, 78750.0, 33.75, "Grace"),
            ("HR", 2, 51000.0, 28.0, "Henry"),
            ("Marketing", 2, 57500.0, 28.5, "Frank"),
        ]
    );
}

#[test]
fn queries_over_an_empty_roster_do_not_panic() {
    let pipeline = EmployeePipeline::new(&[]);

    assert!(pipeline.highest_paid().is_none());
    assert_eq!(pipeline.total_salary(), 0.0);
    assert_eq!(pipeline.average_salary_by_age(30), (None, None));
    assert!(pipeline.group_by_department().is_empty());
    assert!(pipeline.department_report().is_empty());
    assert_eq!(pipeline.join_names(", "), "");
    assert!(pipeline.median_salary().is_none());
}
