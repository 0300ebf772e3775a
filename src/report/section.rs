use std::fmt;

use log::debug;

use crate::{
    analytics::{Employee, EmployeePipeline, compare_sums, flatten_teams},
    config::AnalyticsConfig,
    error::AnalyticsError,
};

/// What the report sections read from.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    pub employees: &'a [Employee],
    /// Employee names grouped per team, for the flattening section.
    pub teams: &'a [Vec<String>],
    pub config: &'a AnalyticsConfig,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        employees: &'a [Employee],
        teams: &'a [Vec<String>],
        config: &'a AnalyticsConfig,
    ) -> Self {
        Self {
            employees,
            teams,
            config,
        }
    }

    fn pipeline(&self) -> EmployeePipeline<'a> {
        EmployeePipeline::new(self.employees)
    }
}

/// One numbered section of the console report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Filtering,
    Mapping,
    Sorting,
    Collecting,
    FlatMapping,
    Grouping,
    Partitioning,
    Reduction,
    ParallelSum,
    ComplexPipeline,
}

impl Section {
    /// All sections, in report order.
    pub const ALL: [Section; 10] = [
        Section::Filtering,
        Section::Mapping,
        Section::Sorting,
        Section::Collecting,
        Section::FlatMapping,
        Section::Grouping,
        Section::Partitioning,
        Section::Reduction,
        Section::ParallelSum,
        Section::ComplexPipeline,
    ];

    pub fn number(&self) -> usize {
        Section::ALL
            .iter()
            .position(|section| section == self)
            .map_or(0, |index| index + 1)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Section::Filtering => "Basic Filtering",
            Section::Mapping => "Mapping",
            Section::Sorting => "Sorting",
            Section::Collecting => "Collecting",
            Section::FlatMapping => "Flat Mapping",
            Section::Grouping => "Grouping",
            Section::Partitioning => "Partitioning",
            Section::Reduction => "Reduction",
            Section::ParallelSum => "Parallel Streams",
            Section::ComplexPipeline => "Complex Pipeline",
        }
    }

    /// Name of the job step rendering this section, e.g. `section-01-basic-filtering`.
    pub fn step_name(&self) -> String {
        format!(
            "section-{:02}-{}",
            self.number(),
            self.title().to_lowercase().replace(' ', "-")
        )
    }

    /// Renders the section as lines of text, heading first, blank line last.
    pub fn render(&self, context: &ReportContext<'_>) -> Result<Vec<String>, AnalyticsError> {
        debug!("Rendering section {}", self);

        let mut lines = vec![format!("📋 {}", self)];
        match self {
            Section::Filtering => render_filtering(context, &mut lines),
            Section::Mapping => render_mapping(context, &mut lines),
            Section::Sorting => render_sorting(context, &mut lines),
            Section::Collecting => render_collecting(context, &mut lines),
            Section::FlatMapping => render_flat_mapping(context, &mut lines),
            Section::Grouping => render_grouping(context, &mut lines),
            Section::Partitioning => render_partitioning(context, &mut lines),
            Section::Reduction => render_reduction(context, &mut lines),
            Section::ParallelSum => render_parallel_sum(context, &mut lines)?,
            Section::ComplexPipeline => render_complex_pipeline(context, &mut lines),
        }
        lines.push(String::new());

        Ok(lines)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Example {}: {}", self.number(), self.title())
    }
}

fn push_employees(lines: &mut Vec<String>, employees: &[&Employee]) {
    lines.extend(employees.iter().map(|e| e.to_string()));
}

fn render_filtering(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    let pipeline = context.pipeline();
    let config = context.config;

    lines.push(format!("{} only:", config.focus_department));
    push_employees(lines, &pipeline.filter_by_department(&config.focus_department));

    lines.push(String::new());
    lines.push(format!(
        "High earners (salary > {:.0}):",
        config.high_earner_threshold
    ));
    push_employees(
        lines,
        &pipeline.filter_by_salary_above(config.high_earner_threshold),
    );
}

fn render_mapping(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    let pipeline = context.pipeline();

    lines.push("Employee names only:".to_string());
    lines.extend(pipeline.names().into_iter().map(String::from));

    lines.push(String::new());
    lines.push("Salaries in thousands:".to_string());
    lines.extend(pipeline.salaries_in_thousands());
}

fn render_sorting(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    let pipeline = context.pipeline();

    lines.push("Sorted by salary (ascending):".to_string());
    push_employees(lines, &pipeline.sorted_by_salary());

    lines.push(String::new());
    lines.push("Sorted by name (descending):".to_string());
    push_employees(
        lines,
        &pipeline.sorted_by_name_desc(Some(context.config.top_names)),
    );
}

fn render_collecting(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    let pipeline = context.pipeline();

    lines.push(format!(
        "Departments: [{}]",
        pipeline.distinct_departments().join(", ")
    ));

    // sets and maps have no order of their own; sort for a stable listing
    let mut unique: Vec<&str> = pipeline.unique_departments().into_iter().collect();
    unique.sort_unstable();
    lines.push(format!("Unique departments: [{}]", unique.join(", ")));

    let mut salaries: Vec<(String, f64)> = pipeline.name_to_salary().into_iter().collect();
    salaries.sort_by(|a, b| a.0.cmp(&b.0));
    let entries: Vec<String> = salaries
        .iter()
        .map(|(name, salary)| format!("{}={:.1}", name, salary))
        .collect();
    lines.push(format!("Name to Salary mapping: {{{}}}", entries.join(", ")));
}

fn render_flat_mapping(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    lines.push("All team members (flattened):".to_string());
    lines.extend(flatten_teams(context.teams));

    lines.push(String::new());
    lines.push("All characters in employee names:".to_string());
    lines.push(
        context
            .pipeline()
            .distinct_name_characters()
            .into_iter()
            .collect(),
    );
}

fn render_grouping(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    let pipeline = context.pipeline();

    for (department, members) in pipeline.group_by_department() {
        lines.push(format!("{}: {} employees", department, members.len()));
    }

    lines.push(String::new());
    lines.push("Grouped by salary range:".to_string());
    for (band, members) in pipeline.group_by_salary_band(&context.config.salary_bands) {
        lines.push(format!("{} salary: {} employees", band, members.len()));
    }
}

fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "n/a".to_string(), |value| format!("${:.0}", value))
}

fn render_partitioning(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    let pipeline = context.pipeline();
    let limit = context.config.young_age_limit;

    let partition = pipeline.partition_by_age(limit);
    lines.push(format!(
        "Young employees (< {}): {}",
        limit,
        partition.matching.len()
    ));
    lines.push(format!(
        "Experienced employees (>= {}): {}",
        limit,
        partition.rest.len()
    ));

    let (young, experienced) = pipeline.average_salary_by_age(limit);
    lines.push(format!("Average salary - Young: {}", format_average(young)));
    lines.push(format!(
        "Average salary - Experienced: {}",
        format_average(experienced)
    ));
}

fn render_reduction(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    let pipeline = context.pipeline();

    lines.push(format!("Total salary: ${:.0}", pipeline.total_salary()));
    if let Some(top) = pipeline.highest_paid() {
        lines.push(format!("Highest paid: {} - ${:.0}", top.name(), top.salary()));
    }
    lines.push(format!(
        "All names: {}",
        pipeline.join_names(&context.config.name_separator)
    ));
}

fn render_parallel_sum(
    context: &ReportContext<'_>,
    lines: &mut Vec<String>,
) -> Result<(), AnalyticsError> {
    let comparison = compare_sums(
        context.config.sum_of_squares_upper,
        context.config.parallel_workers,
    )?;

    lines.push(format!(
        "Sequential result: {} (Time: {}ms)",
        comparison.sequential,
        comparison.sequential_time.as_millis()
    ));
    lines.push(format!(
        "Parallel result: {} (Time: {}ms)",
        comparison.parallel,
        comparison.parallel_time.as_millis()
    ));
    lines.push(format!("Results match: {}", comparison.matches()));

    Ok(())
}

fn render_complex_pipeline(context: &ReportContext<'_>, lines: &mut Vec<String>) {
    lines.push("Department Analysis Report:".to_string());

    for summary in context.pipeline().department_report() {
        lines.push(format!("📊 {} Department:", summary.department));
        lines.push(format!("  - Employees: {}", summary.employee_count));
        lines.push(format!("  - Average Salary: ${:.0}", summary.average_salary));
        lines.push(format!("  - Average Age: {:.1} years", summary.average_age));
        lines.push(format!("  - Top Earner: {}", summary.top_earner));
        lines.push(String::new());
    }
}
