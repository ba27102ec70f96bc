use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use crate::config::constants::{
    timeout_duration, DEFAULT_API_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS, GITHUB_ACCEPT_HEADER,
    GITHUB_API_VERSION, USER_AGENT,
};
use crate::errors::{ReporterError, ReporterResult};
use crate::structs::comment_target::CommentTarget;
use crate::traits::comment_client::CommentClient;

#[derive(Serialize)]
struct CreateCommentRequest<'a> {
    body: &'a str,
}

/// Issue comments through the GitHub REST API.
#[derive(Clone)]
pub struct GitHubCommentClient {
    token: String,
    api_url: String,
    client: Client,
}

impl GitHubCommentClient {
    pub fn new(token: String, api_url: String) -> ReporterResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout_duration(DEFAULT_CONNECT_TIMEOUT_SECS))
            .timeout(timeout_duration(DEFAULT_API_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            token,
            api_url,
            client,
        })
    }

    fn comments_url(&self, target: &CommentTarget) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url.trim_end_matches('/'),
            target.owner,
            target.repo,
            target.issue_number
        )
    }
}

#[async_trait]
impl CommentClient for GitHubCommentClient {
    async fn create_comment(&self, target: &CommentTarget, body: &str) -> ReporterResult<()> {
        let url = self.comments_url(target);
        log::debug!("💬 Posting comment to {url}");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("accept", GITHUB_ACCEPT_HEADER)
            .header("x-github-api-version", GITHUB_API_VERSION)
            .json(&CreateCommentRequest { body })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ReporterError::github_error(status.as_u16(), &text));
        }

        Ok(())
    }
}
