use async_trait::async_trait;
use crate::errors::ReporterResult;
use crate::structs::analysis::analysis_response::AnalysisResponse;
use crate::structs::analysis_request::AnalysisRequest;

/// Remote analysis service. A non-success status surfaces as `ReporterError::ApiError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> ReporterResult<AnalysisResponse>;
}
