mod common;

use std::io::{Error, ErrorKind};

use common::{MockFile, ROSTER_CSV};
use employee_analytics::{
    AnalyticsError,
    analytics::{Employee, EmployeeValidator, load_employees, sample_employees},
    config::AnalyticsConfig,
    core::{
        item::ItemWriter,
        step::{Step, StepBuilder, StepExecution, StepStatus},
    },
    item::{
        csv::csv_reader::CsvItemReaderBuilder, json::json_writer::JsonItemWriterBuilder,
        line::LineItemWriter,
    },
};
use tempfile::tempdir;

#[test]
fn transform_csv_stream_to_json_file_with_error_at_first() {
    let csv = "name,department,salary,age
Alice,Engineering,75k,28
Bob,Engineering,65000,32
Charlie,Marketing,55000,26";

    let reader = CsvItemReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv.as_bytes());
    let validator = EmployeeValidator::default();
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let writer = JsonItemWriterBuilder::new().from_path(&path).unwrap();

    let step = StepBuilder::new()
        .name("csv-to-json".to_string())
        .reader(&reader)
        .processor(&validator)
        .writer(&writer)
        .chunk(3)
        .build()
        .unwrap();

    let mut execution = StepExecution::new(step.get_name());
    let result = step.execute(&mut execution);

    assert!(matches!(result, Err(AnalyticsError::Step(name)) if name == "csv-to-json"));
    assert_eq!(execution.status, StepStatus::ReadError);
    assert_eq!(execution.read_count, 0);
    assert_eq!(execution.write_count, 0);
    assert_eq!(execution.read_error_count, 1);

    let file_content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(file_content, "[]\n");
}

#[test]
fn transform_csv_stream_to_json_file_with_error_at_end() {
    let csv = format!("{}\nZed,HR,1000,old", ROSTER_CSV);

    let reader = CsvItemReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv.as_bytes());
    let validator = EmployeeValidator::default();
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let writer = JsonItemWriterBuilder::new().from_path(&path).unwrap();

    let step = StepBuilder::new()
        .name("csv-to-json".to_string())
        .reader(&reader)
        .processor(&validator)
        .writer(&writer)
        .chunk(3)
        .build()
        .unwrap();

    let mut execution = StepExecution::new(step.get_name());
    let result = step.execute(&mut execution);

    assert!(result.is_err());
    assert_eq!(execution.read_count, 8);
    assert_eq!(execution.write_count, 6);
    assert_eq!(execution.read_error_count, 1);
    assert_eq!(execution.write_error_count, 0);

    // The last, incomplete chunk is never written.
    let file_content = std::fs::read_to_string(&path).unwrap();
    let written: Vec<Employee> = serde_json::from_str(&file_content).unwrap();
    assert_eq!(written, sample_employees()[..6]);
}

#[test]
fn load_fails_when_rejections_exceed_skip_limit() {
    let csv = format!("{}\nGhost,HR,-1,40\nNobody,,1000,30", ROSTER_CSV);
    let reader = CsvItemReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv.as_bytes());

    let result = load_employees(&reader, 1);

    assert!(matches!(result, Err(AnalyticsError::Step(name)) if name == "load-employees"));
}

#[test]
fn missing_csv_file_is_a_reader_error() {
    let dir = tempdir().unwrap();

    let result = CsvItemReaderBuilder::new()
        .has_headers(true)
        .from_path(dir.path().join("absent.csv"));

    assert!(matches!(result, Err(AnalyticsError::ItemReader(_))));
}

#[test]
fn invalid_configurations_are_rejected() {
    for json in [
        r#"{ "salary_bands": { "low_ceiling": 90000, "medium_ceiling": 80000 } }"#,
        r#"{ "parallel_workers": 0 }"#,
        r#"{ "sum_of_squares_upper": 5000000 }"#,
        r#"{ "young_age_limit": "thirty" }"#,
        "not json",
    ] {
        let result = AnalyticsConfig::from_json_str(json);
        assert!(
            matches!(result, Err(AnalyticsError::Config(_))),
            "accepted: {}",
            json
        );
    }
}

#[test]
fn partial_configuration_keeps_defaults() {
    let config = AnalyticsConfig::from_json_str(r#"{ "focus_department": "HR" }"#).unwrap();

    assert_eq!(config.focus_department, "HR");
    assert_eq!(config.young_age_limit, 30);
    assert_eq!(config.sum_of_squares_upper, 1_000_000);
}

#[test]
fn zero_chunk_size_is_a_configuration_error() {
    let reader = CsvItemReaderBuilder::new()
        .has_headers(true)
        .from_reader(ROSTER_CSV.as_bytes());
    let validator = EmployeeValidator::default();
    let writer = LineItemWriter::new(Vec::new());

    let result = StepBuilder::new()
        .name("zero".to_string())
        .reader(&reader)
        .processor(&validator)
        .writer(&writer)
        .chunk(0)
        .build();

    assert!(matches!(result, Err(AnalyticsError::Config(_))));
}

#[test]
fn write_failure_is_reported_as_writer_error() {
    let mut file = MockFile::default();
    file.expect_write()
        .returning(|_| Err(Error::from(ErrorKind::PermissionDenied)));

    let writer = LineItemWriter::new(file);
    let result = ItemWriter::<&str>::write(&writer, &["Total salary: $532000"]);

    assert!(matches!(result, Err(AnalyticsError::ItemWriter(_))));
}
