use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{timeout_duration, DEFAULT_CONNECT_TIMEOUT_SECS, USER_AGENT};
use crate::errors::{ReporterError, ReporterResult};
use crate::structs::analysis::analysis_response::AnalysisResponse;
use crate::structs::analysis_request::AnalysisRequest;
use crate::traits::analysis_api::AnalysisApi;

#[derive(Clone)]
pub struct AnalysisClient {
    api_key: String,
    api_url: String,
    client: Client,
}

impl AnalysisClient {
    pub fn new(api_url: String, api_key: String, timeout_secs: u64) -> ReporterResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout_duration(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(timeout_duration(timeout_secs))
            .build()?;

        Ok(Self {
            api_key,
            api_url,
            client,
        })
    }

    async fn make_request(&self, request: &AnalysisRequest) -> ReporterResult<reqwest::Response> {
        let response = self
            .client
            .post(&self.api_url)
            .header("content-type", "application/json")
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> ReporterResult<AnalysisResponse> {
        log::debug!("🔍 Sending {} chars of error text to {}", request.error.chars().count(), self.api_url);
        let response = self.make_request(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };

            return Err(ReporterError::api_error(
                status.as_u16(),
                &format!("ExplainThisError API {}: {}", status.as_u16(), detail),
            ));
        }

        let body = response.text().await?;
        log::debug!("✅ Analysis API answered {} ({} bytes)", status, body.len());
        AnalysisResponse::from_json(&body)
    }
}
