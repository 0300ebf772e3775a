//! The console walkthrough: ten numbered sections run as one job.
//!
//! Every [`Section`] becomes a tasklet step; the job writes their lines, in
//! order, to any `ItemWriter<String>` (stdout in the demo, a buffer in tests).
//!
//! ```
//! use employee_analytics::analytics::{sample_employees, sample_teams};
//! use employee_analytics::config::AnalyticsConfig;
//! use employee_analytics::item::line::LineItemWriter;
//! use employee_analytics::report::{ReportContext, run_report};
//!
//! let employees = sample_employees();
//! let teams = sample_teams();
//! let config = AnalyticsConfig {
//!     sum_of_squares_upper: 1_000,
//!     ..AnalyticsConfig::default()
//! };
//! let context = ReportContext::new(&employees, &teams, &config);
//!
//! let writer = LineItemWriter::new(Vec::new());
//! let execution = run_report(&context, &writer).unwrap();
//!
//! assert_eq!(execution.step_executions.len(), 10);
//! let text = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(text.contains("Highest paid: Grace - $90000"));
//! ```

pub mod section;
pub mod tasklet;

use crate::{
    core::{
        item::ItemWriter,
        job::{Job, JobBuilder, JobExecution},
        tasklet::{TaskletBuilder, TaskletStep},
    },
    error::AnalyticsError,
};

pub use section::{ReportContext, Section};
pub use tasklet::SectionTasklet;

pub const REPORT_JOB_NAME: &str = "employee-report";

/// Renders every section, in order, into `writer`.
///
/// The parallel section starts its own tokio runtime, so this must not be
/// called from async code.
pub fn run_report(
    context: &ReportContext<'_>,
    writer: &dyn ItemWriter<String>,
) -> Result<JobExecution, AnalyticsError> {
    let tasklets: Vec<SectionTasklet> = Section::ALL
        .iter()
        .map(|section| SectionTasklet::new(*section, context, writer))
        .collect();

    let steps: Vec<TaskletStep> = tasklets
        .iter()
        .map(|tasklet| {
            TaskletBuilder::new(tasklet)
                .name(tasklet.section().step_name())
                .build()
        })
        .collect();

    let job = steps
        .iter()
        .fold(
            JobBuilder::new().name(REPORT_JOB_NAME.to_string()),
            |builder, step| builder.next(step),
        )
        .build();

    writer.open()?;
    let execution = job.run();
    writer.close()?;

    execution
}
