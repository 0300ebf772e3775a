use crate::{
    core::{
        item::ItemWriter,
        step::StepExecution,
        tasklet::{RepeatStatus, Tasklet},
    },
    error::AnalyticsError,
};

use super::section::{ReportContext, Section};

/// Renders one report section and hands its lines to the writer.
pub struct SectionTasklet<'a> {
    section: Section,
    context: &'a ReportContext<'a>,
    writer: &'a dyn ItemWriter<String>,
}

impl<'a> SectionTasklet<'a> {
    pub fn new(
        section: Section,
        context: &'a ReportContext<'a>,
        writer: &'a dyn ItemWriter<String>,
    ) -> Self {
        Self {
            section,
            context,
            writer,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }
}

impl Tasklet for SectionTasklet<'_> {
    fn execute(&self, _step_execution: &StepExecution) -> Result<RepeatStatus, AnalyticsError> {
        let lines = self.section.render(self.context)?;
        self.writer.write(&lines)?;
        self.writer.flush()?;
        Ok(RepeatStatus::Finished)
    }
}
