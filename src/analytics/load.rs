use log::info;

use crate::{
    core::{
        item::{ItemProcessor, ItemProcessorResult, ItemReader},
        step::{Step, StepBuilder, StepExecution},
    },
    error::AnalyticsError,
    item::memory::InMemoryItemWriter,
};

use super::employee::Employee;

const LOAD_STEP_NAME: &str = "load-employees";

/// Rejects records that cannot describe a real employee.
#[derive(Default)]
pub struct EmployeeValidator {}

impl ItemProcessor<Employee, Employee> for EmployeeValidator {
    fn process(&self, item: &Employee) -> ItemProcessorResult<Employee> {
        if item.name().trim().is_empty() {
            return Err(AnalyticsError::ItemProcessor(
                "employee without a name".to_string(),
            ));
        }
        if item.department().trim().is_empty() {
            return Err(AnalyticsError::ItemProcessor(format!(
                "{} has no department",
                item.name()
            )));
        }
        if !item.salary().is_finite() || item.salary() < 0.0 {
            return Err(AnalyticsError::ItemProcessor(format!(
                "{} has an invalid salary: {}",
                item.name(),
                item.salary()
            )));
        }
        if item.age() == 0 {
            return Err(AnalyticsError::ItemProcessor(format!(
                "{} has an invalid age: 0",
                item.name()
            )));
        }
        Ok(item.clone())
    }
}

/// Reads every employee from `reader`, dropping invalid ones.
///
/// Up to `skip_limit` unreadable or invalid records are tolerated; one more
/// fails the load with `AnalyticsError::Step`.
pub fn load_employees(
    reader: &impl ItemReader<Employee>,
    skip_limit: usize,
) -> Result<Vec<Employee>, AnalyticsError> {
    let validator = EmployeeValidator::default();
    let writer = InMemoryItemWriter::new();
    let mut step_execution = StepExecution::new(LOAD_STEP_NAME);

    {
        let step = StepBuilder::new()
            .name(LOAD_STEP_NAME.to_string())
            .reader(reader)
            .processor(&validator)
            .writer(&writer)
            .chunk(16)
            .skip_limit(skip_limit)
            .build()?;

        step.execute(&mut step_execution)?;
    }

    info!(
        "Loaded {} employees ({} skipped)",
        step_execution.write_count,
        step_execution.error_count()
    );

    Ok(writer.into_items())
}
