use crate::config::constants::{OUTPUT_JSON, OUTPUT_ROOT_CAUSE_DETAIL, OUTPUT_ROOT_CAUSE_SHORT};
use crate::errors::ReporterResult;
use crate::structs::analysis::analysis_response::AnalysisResponse;
use crate::traits::workflow_sink::WorkflowSink;

pub struct OutputPublisher;

impl OutputPublisher {
    /// Sets every output, empty root cause fields included.
    pub fn publish<S: WorkflowSink + ?Sized>(response: &AnalysisResponse, sink: &mut S) -> ReporterResult<()> {
        let root_cause = response.root_cause();

        sink.set_output(OUTPUT_JSON, &response.to_output_json())?;
        sink.set_output(OUTPUT_ROOT_CAUSE_SHORT, &root_cause.short)?;
        sink.set_output(OUTPUT_ROOT_CAUSE_DETAIL, &root_cause.detail)?;
        Ok(())
    }
}
