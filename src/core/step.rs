use std::time::{Duration, Instant};

use log::{debug, error, info, warn};
use uuid::Uuid;

use crate::error::AnalyticsError;

use super::{
    build_name,
    item::{ItemProcessor, ItemReader, ItemWriter},
};

/// Status of a step execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step has been created but not run yet.
    Starting,
    /// The step is running.
    Started,
    /// The step completed.
    Success,
    /// Too many read errors.
    ReadError,
    /// Too many rejected items.
    ProcessorError,
    /// Too many write errors.
    WriteError,
    /// A tasklet returned an error.
    Failed,
}

#[derive(Debug, PartialEq)]
pub(crate) enum ChunkStatus {
    /// The reader is exhausted.
    Finished,
    /// The chunk reached its configured size.
    Full,
}

/// Bookkeeping for one run of a step.
#[derive(Debug)]
pub struct StepExecution {
    /// Unique identifier for this step execution
    pub id: Uuid,
    /// Name of the executed step
    pub name: String,
    pub status: StepStatus,
    pub start_time: Instant,
    pub end_time: Instant,
    pub duration: Duration,
    /// Number of items successfully read
    pub read_count: usize,
    /// Number of items successfully processed
    pub process_count: usize,
    /// Number of items successfully written
    pub write_count: usize,
    pub read_error_count: usize,
    pub process_error_count: usize,
    pub write_error_count: usize,
}

impl StepExecution {
    pub fn new(name: &str) -> Self {
        let now = Instant::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            status: StepStatus::Starting,
            start_time: now,
            end_time: now,
            duration: Duration::ZERO,
            read_count: 0,
            process_count: 0,
            write_count: 0,
            read_error_count: 0,
            process_error_count: 0,
            write_error_count: 0,
        }
    }

    /// Total number of read, process and write errors.
    pub fn error_count(&self) -> usize {
        self.read_error_count + self.process_error_count + self.write_error_count
    }

    pub(crate) fn finish(&mut self) {
        self.end_time = Instant::now();
        self.duration = self.end_time.duration_since(self.start_time);
    }
}

/// A single unit of work inside a job.
pub trait Step {
    /// Runs the step, recording counters and status into `step_execution`.
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), AnalyticsError>;

    fn get_name(&self) -> &str;
}

/// Step that reads items, processes them and writes them in chunks.
///
/// Each failed read, rejected item or failed write counts as an error. The step
/// fails as soon as the total error count exceeds `skip_limit`.
pub struct ChunkOrientedStep<'a, I, O> {
    name: String,
    reader: &'a dyn ItemReader<I>,
    processor: &'a dyn ItemProcessor<I, O>,
    writer: &'a dyn ItemWriter<O>,
    chunk_size: usize,
    skip_limit: usize,
}

impl<I, O> Step for ChunkOrientedStep<'_, I, O> {
    fn execute(&self, step_execution: &mut StepExecution) -> Result<(), AnalyticsError> {
        step_execution.start_time = Instant::now();
        step_execution.status = StepStatus::Started;

        info!(
            "Start of step: {}, id: {}",
            step_execution.name, step_execution.id
        );

        if let Err(err) = self.writer.open() {
            error!("Unable to open writer: {}", err);
            step_execution.status = StepStatus::WriteError;
            step_execution.finish();
            return Err(AnalyticsError::Step(self.name.clone()));
        }

        let outcome = self.run_chunks(step_execution);

        if let Err(err) = self.writer.close() {
            error!("Unable to close writer: {}", err);
            if outcome.is_ok() {
                step_execution.status = StepStatus::WriteError;
            }
            step_execution.finish();
            return Err(AnalyticsError::Step(self.name.clone()));
        }

        step_execution.finish();

        info!(
            "End of step: {}, id: {}, status: {:?}",
            step_execution.name, step_execution.id, step_execution.status
        );

        outcome
    }

    fn get_name(&self) -> &str {
        &self.name
    }
}

impl<I, O> ChunkOrientedStep<'_, I, O> {
    fn run_chunks(&self, step_execution: &mut StepExecution) -> Result<(), AnalyticsError> {
        loop {
            let (read_items, chunk_status) = self.read_chunk(step_execution)?;

            if !read_items.is_empty() {
                let processed_items = self.process_chunk(step_execution, &read_items)?;
                self.write_chunk(step_execution, &processed_items)?;
            }

            if chunk_status == ChunkStatus::Finished {
                step_execution.status = StepStatus::Success;
                return Ok(());
            }
        }
    }

    fn is_skip_limit_reached(&self, step_execution: &StepExecution) -> bool {
        step_execution.error_count() > self.skip_limit
    }

    fn read_chunk(
        &self,
        step_execution: &mut StepExecution,
    ) -> Result<(Vec<I>, ChunkStatus), AnalyticsError> {
        debug!("Start reading chunk");

        let mut read_items = Vec::with_capacity(self.chunk_size);

        loop {
            match self.reader.read() {
                Ok(Some(item)) => {
                    read_items.push(item);
                    step_execution.read_count += 1;
                }
                Ok(None) => {
                    debug!("End reading chunk: FINISHED");
                    return Ok((read_items, ChunkStatus::Finished));
                }
                Err(err) => {
                    step_execution.read_error_count += 1;
                    error!("Error occurred during read item: {}", err);

                    if self.is_skip_limit_reached(step_execution) {
                        step_execution.status = StepStatus::ReadError;
                        return Err(AnalyticsError::Step(self.name.clone()));
                    }
                }
            }

            if read_items.len() == self.chunk_size {
                debug!("End reading chunk: FULL");
                return Ok((read_items, ChunkStatus::Full));
            }
        }
    }

    fn process_chunk(
        &self,
        step_execution: &mut StepExecution,
        read_items: &[I],
    ) -> Result<Vec<O>, AnalyticsError> {
        debug!("Start processing chunk");

        let mut processed_items = Vec::with_capacity(read_items.len());

        for item in read_items {
            match self.processor.process(item) {
                Ok(processed) => {
                    processed_items.push(processed);
                    step_execution.process_count += 1;
                }
                Err(err) => {
                    step_execution.process_error_count += 1;
                    warn!("Skipping item: {}", err);

                    if self.is_skip_limit_reached(step_execution) {
                        step_execution.status = StepStatus::ProcessorError;
                        return Err(AnalyticsError::Step(self.name.clone()));
                    }
                }
            }
        }

        debug!("End processing chunk");
        Ok(processed_items)
    }

    fn write_chunk(
        &self,
        step_execution: &mut StepExecution,
        processed_items: &[O],
    ) -> Result<(), AnalyticsError> {
        if processed_items.is_empty() {
            return Ok(());
        }

        debug!("Start writing chunk");

        let result = self
            .writer
            .write(processed_items)
            .and_then(|()| self.writer.flush());

        match result {
            Ok(()) => {
                step_execution.write_count += processed_items.len();
                debug!("End writing chunk");
                Ok(())
            }
            Err(err) => {
                step_execution.write_error_count += processed_items.len();
                error!("ItemWriter error: {}", err);

                if self.is_skip_limit_reached(step_execution) {
                    step_execution.status = StepStatus::WriteError;
                    Err(AnalyticsError::Step(self.name.clone()))
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// Fluent builder for [`ChunkOrientedStep`].
pub struct StepBuilder<'a, I, O> {
    name: Option<String>,
    reader: Option<&'a dyn ItemReader<I>>,
    processor: Option<&'a dyn ItemProcessor<I, O>>,
    writer: Option<&'a dyn ItemWriter<O>>,
    chunk_size: usize,
    skip_limit: usize,
}

impl<I, O> Default for StepBuilder<'_, I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I, O> StepBuilder<'a, I, O> {
    /// Creates a builder with a chunk size of 1 and no fault tolerance.
    pub fn new() -> Self {
        Self {
            name: None,
            reader: None,
            processor: None,
            writer: None,
            chunk_size: 1,
            skip_limit: 0,
        }
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<I>) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn processor(mut self, processor: &'a impl ItemProcessor<I, O>) -> Self {
        self.processor = Some(processor);
        self
    }

    pub fn writer(mut self, writer: &'a impl ItemWriter<O>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Sets the commit interval.
    pub fn chunk(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets how many errors are tolerated before the step fails.
    pub fn skip_limit(mut self, skip_limit: usize) -> Self {
        self.skip_limit = skip_limit;
        self
    }

    pub fn build(self) -> Result<ChunkOrientedStep<'a, I, O>, AnalyticsError> {
        let reader = self
            .reader
            .ok_or_else(|| AnalyticsError::Config("a step requires a reader".to_string()))?;
        let processor = self
            .processor
            .ok_or_else(|| AnalyticsError::Config("a step requires a processor".to_string()))?;
        let writer = self
            .writer
            .ok_or_else(|| AnalyticsError::Config("a step requires a writer".to_string()))?;

        if self.chunk_size == 0 {
            return Err(AnalyticsError::Config(
                "chunk size must be greater than zero".to_string(),
            ));
        }

        Ok(ChunkOrientedStep {
            name: self.name.unwrap_or_else(build_name),
            reader,
            processor,
            writer,
            chunk_size: self.chunk_size,
            skip_limit: self.skip_limit,
        })
    }
}
