use std::collections::HashMap;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::run_outcome::RunOutcome;
use crate::errors::ReporterResult;
use crate::services::analysis_client::AnalysisClient;
use crate::services::github_comment_client::GitHubCommentClient;
use crate::services::request_builder::RequestBuilder;
use crate::structs::input_args::InputArgs;
use crate::structs::run_context::RunContext;
use crate::traits::workflow_sink::WorkflowSink;
use crate::workers::analysis_runner::AnalysisRunner;

/// Dispatches CLI commands against a snapshot of the process environment.
pub struct CommandRunner {
    env: HashMap<String, String>,
}

impl CommandRunner {
    /// Environment variables that are valid unicode; anything else is unusable as input.
    pub fn process_env() -> HashMap<String, String> {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    pub fn with_env(env: HashMap<String, String>) -> Self {
        Self { env }
    }

    pub async fn run_command<S: WorkflowSink>(&self, command: Commands, sink: &mut S) -> ReporterResult<()> {
        let start_time = Instant::now();

        let result = match command {
            Commands::Analyze { inputs } => self.analyze_command(&inputs, sink).await,
            Commands::Validate { inputs } => self.validate_command(&inputs, sink),
        };

        log::info!("⏱️  Command completed in {:.2}s", start_time.elapsed().as_secs_f64());
        result
    }

    async fn analyze_command<S: WorkflowSink>(&self, inputs: &InputArgs, sink: &mut S) -> ReporterResult<()> {
        let config = ConfigManager::load(inputs, &self.env)?;
        let context = RunContext::from_env(&self.env)?;
        log::debug!("Resolved {config:?}");

        let api = AnalysisClient::new(config.api_url.clone(), config.api_key.clone(), config.timeout_secs)?;
        let comments = config
            .github_token
            .clone()
            .map(|token| GitHubCommentClient::new(token, context.api_url.clone()))
            .transpose()?;

        let outcome = AnalysisRunner::new(&config, &context, &api, comments.as_ref(), sink)
            .run()
            .await?;

        match outcome {
            RunOutcome::Completed { comment } => {
                log::info!("✅ Analysis published for {} ({comment:?})", context.repo_slug());
            }
            RunOutcome::ApiErrorIgnored => {
                log::info!("⏭️ Analysis API unavailable; nothing published");
            }
        }

        Ok(())
    }

    fn validate_command<S: WorkflowSink>(&self, inputs: &InputArgs, sink: &mut S) -> ReporterResult<()> {
        log::info!("🔍 Validating step inputs...");

        let config = ConfigManager::load(inputs, &self.env)?;
        let context = RunContext::from_env(&self.env)?;
        let request = RequestBuilder::build(&config.error_text, &context);

        sink.info(&format!("Analysis endpoint: {}", config.api_url));
        sink.info(&format!("Repository: {} (job {})", request.repo, request.job));
        sink.info(&format!("Run: {}", request.run_url));
        sink.info(&format!(
            "Error text: {} characters ({} sent)",
            config.error_text.chars().count(),
            request.error.chars().count()
        ));
        sink.info(&format!(
            "PR comment: {}",
            match (
                config.comment_pr,
                context.is_pull_request(),
                config.github_token.is_some(),
                context.issue_number().is_some(),
            ) {
                (false, ..) => "disabled",
                (true, false, ..) => "skipped (not a pull request event)",
                (true, true, false, _) => "skipped (no GITHUB_TOKEN)",
                (true, true, true, false) => "skipped (no PR number in the event payload)",
                (true, true, true, true) => "enabled",
            }
        ));
        sink.info("✅ Configuration is valid");
        Ok(())
    }
}
