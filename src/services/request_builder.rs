use crate::config::constants::{ANALYSIS_STEP_LABEL, MAX_REQUEST_ERROR_CHARS};
use crate::helpers::text_helper::TextHelper;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::run_context::RunContext;

pub struct RequestBuilder;

impl RequestBuilder {
    /// Error text beyond the request limit is dropped silently.
    pub fn build(error_text: &str, context: &RunContext) -> AnalysisRequest {
        AnalysisRequest {
            error: TextHelper::truncate_chars(error_text, MAX_REQUEST_ERROR_CHARS).to_string(),
            repo: context.repo_slug(),
            sha: context.sha.clone(),
            job: context.job.clone(),
            step: ANALYSIS_STEP_LABEL.to_string(),
            run_url: context.run_url(),
        }
    }
}
