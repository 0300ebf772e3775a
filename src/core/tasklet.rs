use std::time::Instant;

use log::{error, info};

use crate::error::AnalyticsError;

use super::{
    build_name,
    step::{Step, StepExecution, StepStatus},
};

pub enum RepeatStatus {
    /// The tasklet wants to be called again.
    Continuable,
    /// The tasklet has finished executing.
    Finished,
}

/// A step body that does not follow the read/process/write model.
///
/// The owning [`TaskletStep`] calls `execute` until it returns
/// [`RepeatStatus::Finished`] or an error.
pub trait Tasklet {
    fn execute(&self, step_execution: &StepExecution) -> Result<RepeatStatus, AnalyticsError>;
}

pub struct TaskletStep<'a> {
    name: String,
    tasklet: &'a dyn Tasklet,
}

impl Step for TaskletStep<'_> {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), AnalyticsError> {
        step_execution.start_time = Instant::now();
        step_execution.status = StepStatus::Started;

        info!(
            "Start of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        loop {
            match self.tasklet.execute(step_execution) {
                Ok(RepeatStatus::Continuable) => continue,
                Ok(RepeatStatus::Finished) => break,
                Err(err) => {
                    error!("Tasklet of step {} failed: {}", self.name, err);
                    step_execution.status = StepStatus::Failed;
                    step_execution.finish();
                    return Err(AnalyticsError::Step(self.name.clone()));
                }
            }
        }

        step_execution.status = StepStatus::Success;
        step_execution.finish();

        info!(
            "End of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        Ok(())
    }

    fn get_name(&self) -> &str {
        &self.name
    }
}

pub struct TaskletBuilder<'a> {
    name: Option<String>,
    tasklet: &'a dyn Tasklet,
}

impl<'a> TaskletBuilder<'a> {
    pub fn new(tasklet: &'a dyn Tasklet) -> Self {
        Self {
            name: None,
            tasklet,
        }
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn build(self) -> TaskletStep<'a> {
        TaskletStep {
            name: self.name.unwrap_or_else(build_name),
            tasklet: self.tasklet,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::{
        core::step::{Step, StepExecution, StepStatus},
        error::AnalyticsError,
    };

    use super::{RepeatStatus, Tasklet, TaskletBuilder};

    struct CountDown {
        remaining: Cell<u32>,
        calls: Cell<u32>,
    }

    impl Tasklet for CountDown {
        fn execute(&self, _step_execution: &StepExecution) -> Result<RepeatStatus, AnalyticsError> {
            self.calls.set(self.calls.get() + 1);
            if self.remaining.get() == 0 {
                return Ok(RepeatStatus::Finished);
            }
            self.remaining.set(self.remaining.get() - 1);
            Ok(RepeatStatus::Continuable)
        }
    }

    struct Broken;

    impl Tasklet for Broken {
        fn execute(&self, _step_execution: &StepExecution) -> Result<RepeatStatus, AnalyticsError> {
            Err(AnalyticsError::ItemWriter("sink closed".to_string()))
        }
    }

    #[test]
    fn repeats_until_finished() {
        let tasklet = CountDown {
            remaining: Cell::new(2),
            calls: Cell::new(0),
        };
        let step = TaskletBuilder::new(&tasklet)
            .name("count-down".to_string())
            .build();

        let mut execution = StepExecution::new(step.get_name());

        assert!(step.execute(&mut execution).is_ok());
        assert_eq!(execution.status, StepStatus::Success);
        assert_eq!(tasklet.calls.get(), 3);
    }

    #[test]
    fn failing_tasklet_fails_the_step() {
        let step = TaskletBuilder::new(&Broken).build();
        let mut execution = StepExecution::new(step.get_name());

        let result = step.execute(&mut execution);

        assert!(matches!(result, Err(AnalyticsError::Step(_))));
        assert_eq!(execution.status, StepStatus::Failed);
    }
}
