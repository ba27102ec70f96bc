use crate::enums::comment_outcome::CommentOutcome;
use crate::enums::run_outcome::RunOutcome;
use crate::errors::ReporterResult;
use crate::services::comment_renderer::CommentRenderer;
use crate::services::output_publisher::OutputPublisher;
use crate::services::request_builder::RequestBuilder;
use crate::services::summary_renderer::SummaryRenderer;
use crate::structs::analysis::analysis_response::AnalysisResponse;
use crate::structs::comment_target::CommentTarget;
use crate::structs::config::reporter_config::ReporterConfig;
use crate::structs::run_context::RunContext;
use crate::traits::analysis_api::AnalysisApi;
use crate::traits::comment_client::CommentClient;
use crate::traits::workflow_sink::WorkflowSink;

/// One pass of the reporter: request, outputs, summary, then the optional comment.
///
/// `comments` is `None` when no GitHub token is available.
pub struct AnalysisRunner<'a, A: AnalysisApi, C: CommentClient, S: WorkflowSink> {
    config: &'a ReporterConfig,
    context: &'a RunContext,
    api: &'a A,
    comments: Option<&'a C>,
    sink: &'a mut S,
}

impl<'a, A: AnalysisApi, C: CommentClient, S: WorkflowSink> AnalysisRunner<'a, A, C, S> {
    pub fn new(
        config: &'a ReporterConfig,
        context: &'a RunContext,
        api: &'a A,
        comments: Option<&'a C>,
        sink: &'a mut S,
    ) -> Self {
        Self {
            config,
            context,
            api,
            comments,
            sink,
        }
    }

    pub async fn run(&mut self) -> ReporterResult<RunOutcome> {
        let request = RequestBuilder::build(&self.config.error_text, self.context);
        self.sink.debug(&format!("Requesting analysis for {} ({})", request.repo, request.job));

        let response = match self.api.analyze(&request).await {
            Ok(response) => response,
            Err(err) if err.is_api_error() && !self.config.fail_on_api_error => {
                log::warn!("⚠️ {err}");
                self.sink.warning(&err.to_string());
                return Ok(RunOutcome::ApiErrorIgnored);
            }
            Err(err) => return Err(err),
        };

        OutputPublisher::publish(&response, &mut *self.sink)?;

        let summary = SummaryRenderer::render(&self.config.error_text, &response);
        self.sink.write_summary(&summary)?;

        let comment = self.publish_comment(&response).await?;
        if let Some(message) = comment.skip_message() {
            self.sink.info(message);
        }

        Ok(RunOutcome::Completed { comment })
    }

    async fn publish_comment(&mut self, response: &AnalysisResponse) -> ReporterResult<CommentOutcome> {
        if !self.config.comment_pr {
            return Ok(CommentOutcome::Disabled);
        }
        if !self.context.is_pull_request() {
            return Ok(CommentOutcome::NotPullRequest);
        }
        let Some(client) = self.comments else {
            return Ok(CommentOutcome::MissingToken);
        };
        let Some(issue_number) = self.context.issue_number() else {
            return Ok(CommentOutcome::MissingIssueNumber);
        };

        let target = CommentTarget {
            owner: self.context.owner.clone(),
            repo: self.context.repo.clone(),
            issue_number,
        };
        let body = CommentRenderer::render(response, &self.context.run_url());
        client.create_comment(&target, &body).await?;

        log::info!("💬 Posted analysis comment on #{issue_number}");
        Ok(CommentOutcome::Posted { issue_number })
    }
}
