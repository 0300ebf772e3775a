//! Prints the ten-section employee report, then exports the department summary.
//!
//! ```text
//! cargo run --example employee_report --features full -- [roster.csv] [config.json]
//! ```
//!
//! Without arguments the built-in eight-person roster and default settings are used.
use std::env::{self, temp_dir};

use anyhow::Result;
use employee_analytics::{
    analytics::{
        DepartmentSummary, EmployeePipeline, load_employees, sample_employees, sample_teams,
    },
    config::AnalyticsConfig,
    core::{
        item::{ItemWriter, PassThroughProcessor},
        job::{Job, JobBuilder},
        step::StepBuilder,
    },
    item::{
        csv::{csv_reader::CsvItemReaderBuilder, csv_writer::CsvItemWriterBuilder},
        json::json_writer::JsonItemWriterBuilder,
        line::LineItemWriter,
        logger::LoggerWriter,
        memory::InMemoryItemReader,
    },
    report::{ReportContext, run_report},
};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);

    let (employees, teams) = match args.next() {
        Some(path) => {
            info!("Loading roster from {}", path);
            let reader = CsvItemReaderBuilder::new()
                .has_headers(true)
                .from_path(&path)?;
            let employees = load_employees(&reader, 5)?;
            let teams = EmployeePipeline::new(&employees).teams_by_department();
            (employees, teams)
        }
        None => (sample_employees(), sample_teams()),
    };

    let config = match args.next() {
        Some(path) => AnalyticsConfig::from_path(path)?,
        None => AnalyticsConfig::default(),
    };

    let context = ReportContext::new(&employees, &teams, &config);

    println!("🚀 Employee Analytics\n");
    let stdout = LineItemWriter::stdout();
    let execution = run_report(&context, &stdout)?;
    info!("Report rendered in {:?}", execution.duration);

    let report = EmployeePipeline::new(&employees).department_report();
    LoggerWriter::new().write(report.as_slice())?;

    let processor = PassThroughProcessor::<DepartmentSummary>::new();

    let csv_reader = InMemoryItemReader::new(report.clone());
    let csv_writer = CsvItemWriterBuilder::new()
        .has_headers(true)
        .from_path(temp_dir().join("department-report.csv"))?;
    let csv_step = StepBuilder::new()
        .name("export-csv".to_string())
        .reader(&csv_reader)
        .processor(&processor)
        .writer(&csv_writer)
        .chunk(10)
        .build()?;

    let json_reader = InMemoryItemReader::new(report);
    let json_writer = JsonItemWriterBuilder::new()
        .pretty_formatter(true)
        .from_path(temp_dir().join("department-report.json"))?;
    let json_step = StepBuilder::new()
        .name("export-json".to_string())
        .reader(&json_reader)
        .processor(&processor)
        .writer(&json_writer)
        .chunk(10)
        .build()?;

    let job = JobBuilder::new()
        .name("export-department-report".to_string())
        .start(&csv_step)
        .next(&json_step)
        .build();
    job.run()?;

    info!("Department report exported to {}", temp_dir().display());

    Ok(())
}
