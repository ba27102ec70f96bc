use std::collections::HashMap;
use std::fs;
use std::path::Path;
use clap::Parser;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use explain_error_action::errors::ReporterError;
use explain_error_action::logger::workflow_logger::WorkflowLogger;
use explain_error_action::structs::cli::Cli;
use explain_error_action::workers::command_runner::CommandRunner;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("output"), "").unwrap();
        fs::write(dir.path().join("summary"), "").unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().to_string()
    }

    fn write_event(&self, payload: &serde_json::Value) -> String {
        let path = self.path("event.json");
        fs::write(&path, payload.to_string()).unwrap();
        path
    }

    fn logger(&self) -> WorkflowLogger<Vec<u8>> {
        WorkflowLogger::new(
            Vec::new(),
            Some(self.dir.path().join("output")),
            Some(self.dir.path().join("summary")),
        )
    }

    fn summary(&self) -> String {
        fs::read_to_string(self.dir.path().join("summary")).unwrap()
    }

    /// Parses the `name<<delimiter` blocks written to the output file.
    fn outputs(&self) -> HashMap<String, String> {
        parse_outputs(&self.dir.path().join("output"))
    }
}

fn parse_outputs(path: &Path) -> HashMap<String, String> {
    let content = fs::read_to_string(path).unwrap();
    let mut outputs = HashMap::new();
    let mut lines = content.lines();

    while let Some(header) = lines.next() {
        let (name, delimiter) = header.split_once("<<").unwrap();
        let mut value = Vec::new();
        for line in lines.by_ref() {
            if line == delimiter {
                break;
            }
            value.push(line);
        }
        outputs.insert(name.to_string(), value.join("\n"));
    }

    outputs
}

fn base_env(workspace: &Workspace, event_name: &str, event_path: Option<String>, api: &MockServer) -> HashMap<String, String> {
    let mut env = HashMap::from([
        ("GITHUB_REPOSITORY".to_string(), "octo/app".to_string()),
        ("GITHUB_SHA".to_string(), "abc123".to_string()),
        ("GITHUB_JOB".to_string(), "test".to_string()),
        ("GITHUB_RUN_ID".to_string(), "555".to_string()),
        ("GITHUB_SERVER_URL".to_string(), "https://github.com".to_string()),
        ("GITHUB_API_URL".to_string(), api.uri()),
        ("GITHUB_EVENT_NAME".to_string(), event_name.to_string()),
        ("GITHUB_OUTPUT".to_string(), workspace.path("output")),
        ("GITHUB_STEP_SUMMARY".to_string(), workspace.path("summary")),
    ]);
    if let Some(event_path) = event_path {
        env.insert("GITHUB_EVENT_PATH".to_string(), event_path);
    }
    env
}

fn analyze(api_url: &str, extra: &[&str]) -> Cli {
    let mut args = vec![
        "explain-error",
        "analyze",
        "--error",
        "TypeError: x is undefined",
        "--api-key",
        "secret",
        "--api-url",
        api_url,
    ];
    args.extend_from_slice(extra);
    Cli::try_parse_from(args).unwrap()
}

fn example_analysis() -> serde_json::Value {
    json!({
        "analysis": {
            "root_cause": {"short": "null deref", "detail": "x was never initialized"},
            "fixes": ["check init order"],
            "commands": ["npm test"],
            "docs": []
        }
    })
}

#[tokio::test]
async fn pull_request_run_publishes_everything() {
    let workspace = Workspace::new();
    let analysis_api = MockServer::start().await;
    let github = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ci/analyze"))
        .and(header("authorization", "Bearer secret"))
        .and(body_partial_json(json!({
            "error": "TypeError: x is undefined",
            "repo": "octo/app",
            "sha": "abc123",
            "job": "test",
            "step": "analysis",
            "run_url": "https://github.com/octo/app/actions/runs/555"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(example_analysis()))
        .expect(1)
        .mount(&analysis_api)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/octo/app/issues/17/comments"))
        .and(header("authorization", "Bearer gh-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&github)
        .await;

    let event_path = workspace.write_event(&json!({"pull_request": {"number": 17}}));
    let mut env = base_env(&workspace, "pull_request", Some(event_path), &github);
    env.insert("GITHUB_TOKEN".to_string(), "gh-token".to_string());

    let cli = analyze(&format!("{}/ci/analyze", analysis_api.uri()), &[]);
    let mut logger = workspace.logger();
    CommandRunner::with_env(env)
        .run_command(cli.command, &mut logger)
        .await
        .unwrap();

    let outputs = workspace.outputs();
    assert_eq!(outputs["root_cause_short"], "null deref");
    assert_eq!(outputs["root_cause_detail"], "x was never initialized");
    assert_eq!(outputs["json"], example_analysis().to_string());

    let summary = workspace.summary();
    assert!(summary.starts_with("# ExplainThisError — CI Analysis\n"));
    assert!(summary.contains("> null deref\n"));
    assert!(summary.contains("```bash\nnpm test\n```"));
    assert!(!summary.contains("### Docs"));

    let requests = github.received_requests().await.unwrap();
    let comment: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let body = comment["body"].as_str().unwrap();
    assert!(body.starts_with("## 🔎 ExplainThisError — CI Analysis\n**Root cause:** null deref"));
    assert!(body.ends_with("_Run:_ https://github.com/octo/app/actions/runs/555"));
}

#[tokio::test]
async fn push_run_skips_the_comment() {
    let workspace = Workspace::new();
    let analysis_api = MockServer::start().await;
    let github = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(example_analysis()))
        .mount(&analysis_api)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&github)
        .await;

    let mut env = base_env(&workspace, "push", None, &github);
    env.insert("GITHUB_TOKEN".to_string(), "gh-token".to_string());

    let cli = analyze(&analysis_api.uri(), &["--comment-pr", "true"]);
    let mut logger = workspace.logger();
    CommandRunner::with_env(env)
        .run_command(cli.command, &mut logger)
        .await
        .unwrap();

    assert!(workspace.summary().contains("### Root cause"));
    let stdout = String::from_utf8(logger.into_inner()).unwrap();
    assert!(stdout.contains("Event is not a pull request; skipping PR comment."));
}

#[tokio::test]
async fn ignored_api_error_warns_and_publishes_nothing() {
    let workspace = Workspace::new();
    let analysis_api = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model overloaded"))
        .mount(&analysis_api)
        .await;

    let env = base_env(&workspace, "push", None, &analysis_api);
    let cli = analyze(&analysis_api.uri(), &[]);
    let mut logger = workspace.logger();
    CommandRunner::with_env(env)
        .run_command(cli.command, &mut logger)
        .await
        .unwrap();

    assert!(workspace.outputs().is_empty());
    assert!(workspace.summary().is_empty());
    let stdout = String::from_utf8(logger.into_inner()).unwrap();
    assert!(stdout.contains("::warning::ExplainThisError API 500: model overloaded"));
}

#[tokio::test]
async fn fatal_api_error_reports_the_status() {
    let workspace = Workspace::new();
    let analysis_api = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&analysis_api)
        .await;

    let env = base_env(&workspace, "push", None, &analysis_api);
    let cli = analyze(&analysis_api.uri(), &["--fail-on-api-error", "true"]);
    let mut logger = workspace.logger();
    let err = CommandRunner::with_env(env)
        .run_command(cli.command, &mut logger)
        .await
        .unwrap_err();

    assert!(err.is_api_error());
    assert_eq!(err.user_message(), "ExplainThisError API 500: Internal Server Error");
    assert!(workspace.summary().is_empty());
}

#[tokio::test]
async fn missing_api_key_fails_before_any_request() {
    let workspace = Workspace::new();
    let analysis_api = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&analysis_api)
        .await;

    let env = base_env(&workspace, "push", None, &analysis_api);
    let cli = Cli::try_parse_from([
        "explain-error",
        "analyze",
        "--error",
        "boom",
        "--api-url",
        analysis_api.uri().as_str(),
    ])
    .unwrap();
    let mut logger = workspace.logger();
    let err = CommandRunner::with_env(env)
        .run_command(cli.command, &mut logger)
        .await
        .unwrap_err();

    assert!(matches!(err, ReporterError::ConfigurationError { .. }));
    assert_eq!(err.to_string(), "Input required and not supplied: api_key");
}

#[tokio::test]
async fn validate_resolves_without_network() {
    let workspace = Workspace::new();
    let unused = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&unused)
        .await;

    let env = base_env(&workspace, "pull_request", None, &unused);
    let cli = Cli::try_parse_from([
        "explain-error",
        "validate",
        "--error",
        "boom",
        "--api-key",
        "secret",
        "--api-url",
        unused.uri().as_str(),
    ])
    .unwrap();
    let mut logger = workspace.logger();
    CommandRunner::with_env(env)
        .run_command(cli.command, &mut logger)
        .await
        .unwrap();

    let stdout = String::from_utf8(logger.into_inner()).unwrap();
    assert!(stdout.contains("Repository: octo/app (job test)"));
    assert!(stdout.contains("PR comment: skipped (no GITHUB_TOKEN)"));
    assert!(!stdout.contains("secret"));
    assert!(workspace.summary().is_empty());
}

#[tokio::test]
async fn validate_flags_a_pull_request_without_a_number() {
    let workspace = Workspace::new();
    let unused = MockServer::start().await;

    let event_path = workspace.write_event(&json!({"pull_request": {"title": "no number"}}));
    let mut env = base_env(&workspace, "pull_request", Some(event_path), &unused);
    env.insert("GITHUB_TOKEN".to_string(), "gh-token".to_string());

    let cli = Cli::try_parse_from([
        "explain-error",
        "validate",
        "--error",
        "boom",
        "--api-key",
        "secret",
    ])
    .unwrap();
    let mut logger = workspace.logger();
    CommandRunner::with_env(env)
        .run_command(cli.command, &mut logger)
        .await
        .unwrap();

    let stdout = String::from_utf8(logger.into_inner()).unwrap();
    assert!(stdout.contains("PR comment: skipped (no PR number in the event payload)"));
    assert!(!stdout.contains("PR comment: enabled"));
}
