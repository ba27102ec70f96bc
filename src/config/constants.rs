use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.explainthiserror.com/ci/analyze";
pub const DEFAULT_COMMENT_PR: &str = "true";
pub const DEFAULT_FAIL_ON_API_ERROR: &str = "false";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_GITHUB_SERVER_URL: &str = "https://github.com";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_API_VERSION: &str = "2022-11-28";
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

pub const USER_AGENT: &str = concat!("explain-error-action/", env!("CARGO_PKG_VERSION"));

pub const ANALYSIS_STEP_LABEL: &str = "analysis";
pub const UNKNOWN_PLACEHOLDER: &str = "unknown";

// Payload and rendering limits, counted in characters or list entries.
pub const MAX_REQUEST_ERROR_CHARS: usize = 20_000;
pub const SUMMARY_ERROR_PREVIEW_CHARS: usize = 1_000;
pub const SUMMARY_MAX_FIXES: usize = 10;
pub const SUMMARY_MAX_DOCS: usize = 10;
pub const COMMENT_MAX_FIXES: usize = 10;
pub const COMMENT_MAX_COMMANDS: usize = 12;
pub const COMMENT_MAX_DOCS: usize = 8;

pub const SUMMARY_HEADING: &str = "ExplainThisError — CI Analysis";
pub const COMMENT_HEADING: &str = "## 🔎 ExplainThisError — CI Analysis";

pub const OUTPUT_JSON: &str = "json";
pub const OUTPUT_ROOT_CAUSE_SHORT: &str = "root_cause_short";
pub const OUTPUT_ROOT_CAUSE_DETAIL: &str = "root_cause_detail";

pub const INPUT_ERROR: &str = "error";
pub const INPUT_API_KEY: &str = "api_key";
pub const INPUT_TIMEOUT_SECONDS: &str = "timeout_seconds";

pub const PULL_REQUEST_EVENTS: &[&str] = &["pull_request", "pull_request_target"];

pub const ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_GITHUB_SHA: &str = "GITHUB_SHA";
pub const ENV_GITHUB_JOB: &str = "GITHUB_JOB";
pub const ENV_GITHUB_RUN_ID: &str = "GITHUB_RUN_ID";
pub const ENV_GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const ENV_GITHUB_EVENT_NAME: &str = "GITHUB_EVENT_NAME";
pub const ENV_GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const ENV_GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";
pub const ENV_GITHUB_STEP_SUMMARY: &str = "GITHUB_STEP_SUMMARY";
pub const ENV_RUNNER_DEBUG: &str = "RUNNER_DEBUG";
pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
