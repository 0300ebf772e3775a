use std::time::{Duration, Instant};

use log::info;
use uuid::Uuid;

use crate::error::AnalyticsError;

use super::{
    build_name,
    step::{Step, StepExecution},
};

/// Type alias for job execution results.
type JobResult<T> = Result<T, AnalyticsError>;

/// Represents a job that can be executed.
///
/// A job is a container for a sequence of steps that are executed in order.
/// The first failing step aborts the job.
///
/// # Example Usage
///
/// ```rust,no_run,compile_fail
/// use employee_analytics::core::job::{Job, JobBuilder};
/// use employee_analytics::core::tasklet::TaskletBuilder;
///
/// let step = TaskletBuilder::new(&some_tasklet)
///     .name("render-section".to_string())
///     .build();
///
/// let job = JobBuilder::new()
///     .name("employee-report".to_string())
///     .start(&step)
///     .build();
///
/// let result = job.run();
/// ```
pub trait Job {
    /// Runs the job and returns the result of the job execution.
    ///
    /// # Returns
    /// - `Ok(JobExecution)` when every step succeeds
    /// - `Err(AnalyticsError::Step)` naming the first step that failed
    fn run(&self) -> JobResult<JobExecution>;
}

/// Represents the execution of a job.
#[derive(Debug)]
pub struct JobExecution {
    /// The time when the job started executing
    pub start: Instant,
    /// The time when the job finished executing
    pub end: Instant,
    /// The total duration of the job execution
    pub duration: Duration,
    /// One execution record per step, in execution order
    pub step_executions: Vec<StepExecution>,
}

/// Represents an instance of a job.
///
/// A job instance is created through the `JobBuilder` and executed by calling
/// the `run` method. The steps are executed in the order they were added.
pub struct JobInstance<'a> {
    /// Unique identifier for this job instance
    id: Uuid,
    /// Human-readable name for the job
    name: String,
    /// Collection of steps that make up this job, in execution order
    steps: Vec<&'a dyn Step>,
}

impl JobInstance<'_> {
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl Job for JobInstance<'_> {
    fn run(&self) -> JobResult<JobExecution> {
        let start = Instant::now();

        info!("Start of job: {}, id: {}", self.name, self.id);

        let mut step_executions = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            let mut step_execution = StepExecution::new(step.get_name());

            // If a step fails, abort the job and return an error
            if step.execute(&mut step_execution).is_err() {
                return Err(AnalyticsError::Step(step.get_name().to_owned()));
            }

            step_executions.push(step_execution);
        }

        info!("End of job: {}, id: {}", self.name, self.id);

        Ok(JobExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            step_executions,
        })
    }
}

/// Builder for creating a job instance.
///
/// # Example
///
/// ```rust,no_run,compile_fail
/// use employee_analytics::core::job::JobBuilder;
///
/// let job = JobBuilder::new()
///     .name("load-and-report".to_string())
///     .start(&load_step)
///     .next(&report_step)
///     .build();
/// ```
#[derive(Default)]
pub struct JobBuilder<'a> {
    /// Optional name for the job (generated randomly if not specified)
    name: Option<String>,
    /// Collection of steps to be executed, in order
    steps: Vec<&'a dyn Step>,
}

impl<'a> JobBuilder<'a> {
    pub fn new() -> Self {
        Self {
            name: None,
            steps: Vec::new(),
        }
    }

    pub fn name(mut self, name: String) -> JobBuilder<'a> {
        self.name = Some(name);
        self
    }

    /// Sets the first step of the job.
    ///
    /// Same as `next()`, reads better for the initial step.
    pub fn start(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    /// Adds a step to the job. Steps run in the order they are added.
    pub fn next(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> JobInstance<'a> {
        JobInstance {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::{
        core::{
            step::{Step, StepExecution},
            tasklet::{RepeatStatus, Tasklet, TaskletBuilder},
        },
        error::AnalyticsError,
    };

    use super::{Job, JobBuilder};

    struct Push<'a> {
        label: &'static str,
        trace: &'a RefCell<Vec<&'static str>>,
        fail: bool,
    }

    impl Tasklet for Push<'_> {
        fn execute(&self, _step_execution: &StepExecution) -> Result<RepeatStatus, AnalyticsError> {
            if self.fail {
                return Err(AnalyticsError::ItemWriter(self.label.to_string()));
            }
            self.trace.borrow_mut().push(self.label);
            Ok(RepeatStatus::Finished)
        }
    }

    #[test]
    fn runs_steps_in_order() {
        let trace = RefCell::new(Vec::new());
        let first = Push {
            label: "first",
            trace: &trace,
            fail: false,
        };
        let second = Push {
            label: "second",
            trace: &trace,
            fail: false,
        };
        let step1 = TaskletBuilder::new(&first).build();
        let step2 = TaskletBuilder::new(&second).build();

        let job = JobBuilder::new()
            .name("ordered".to_string())
            .start(&step1)
            .next(&step2)
            .build();

        let execution = job.run().unwrap();

        assert_eq!(job.get_name(), "ordered");
        assert_eq!(*trace.borrow(), vec!["first", "second"]);
        assert_eq!(execution.step_executions.len(), 2);
        assert_eq!(execution.step_executions[0].name, step1.get_name());
    }

    #[test]
    fn stops_at_first_failing_step() {
        let trace = RefCell::new(Vec::new());
        let broken = Push {
            label: "broken",
            trace: &trace,
            fail: true,
        };
        let after = Push {
            label: "after",
            trace: &trace,
            fail: false,
        };
        let step1 = TaskletBuilder::new(&broken)
            .name("broken-step".to_string())
            .build();
        let step2 = TaskletBuilder::new(&after).build();

        let job = JobBuilder::new().start(&step1).next(&step2).build();

        let result = job.run();

        assert!(matches!(result, Err(AnalyticsError::Step(name)) if name == "broken-step"));
        assert!(trace.borrow().is_empty());
    }

    #[test]
    fn unnamed_job_gets_a_generated_name() {
        let job = JobBuilder::new().build();

        assert_eq!(job.get_name().len(), 8);
        assert!(job.run().unwrap().step_executions.is_empty());
    }
}
