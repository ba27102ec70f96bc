use serde::Serialize;

/// Body of the `POST` to the analysis API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    pub error: String,
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    pub job: String,
    pub step: String,
    pub run_url: String,
}
