use crate::errors::ReporterResult;

/// Where a run reports to: step outputs, the job summary, and runner log annotations.
#[cfg_attr(test, mockall::automock)]
pub trait WorkflowSink {
    fn set_output(&mut self, name: &str, value: &str) -> ReporterResult<()>;

    /// Appends one rendered markdown document to the job summary.
    fn write_summary(&mut self, markdown: &str) -> ReporterResult<()>;

    fn info(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    fn error(&mut self, message: &str);

    fn debug(&mut self, message: &str);
}
