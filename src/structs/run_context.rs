use std::collections::HashMap;
use std::fs;
use std::path::Path;
use serde_json::Value;
use crate::config::constants::{
    DEFAULT_GITHUB_API_URL, DEFAULT_GITHUB_SERVER_URL, ENV_GITHUB_API_URL, ENV_GITHUB_EVENT_NAME,
    ENV_GITHUB_EVENT_PATH, ENV_GITHUB_JOB, ENV_GITHUB_REPOSITORY, ENV_GITHUB_RUN_ID,
    ENV_GITHUB_SERVER_URL, ENV_GITHUB_SHA, PULL_REQUEST_EVENTS, UNKNOWN_PLACEHOLDER,
};
use crate::errors::{ReporterError, ReporterResult};

/// Facts about the current workflow run, read once from the runner environment.
#[derive(Debug, Clone, PartialEq)]
pub struct RunContext {
    pub owner: String,
    pub repo: String,
    pub sha: Option<String>,
    pub job: String,
    pub run_id: Option<String>,
    pub server_url: String,
    pub api_url: String,
    pub event_name: String,
    pub payload: Value,
}

impl RunContext {
    pub fn from_env(env: &HashMap<String, String>) -> ReporterResult<Self> {
        let lookup = |key: &str| {
            env.get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let payload = match lookup(ENV_GITHUB_EVENT_PATH) {
            Some(path) => Self::load_payload(Path::new(&path))?,
            None => Value::Object(Default::default()),
        };

        let (owner, repo) = match lookup(ENV_GITHUB_REPOSITORY) {
            Some(slug) => Self::split_slug(&slug)?,
            None => Self::repo_from_payload(&payload).ok_or_else(|| {
                ReporterError::config_error(
                    "context.repo requires a GITHUB_REPOSITORY environment variable like 'owner/repo'",
                    Some(ENV_GITHUB_REPOSITORY),
                )
            })?,
        };

        Ok(Self {
            owner,
            repo,
            sha: lookup(ENV_GITHUB_SHA),
            job: lookup(ENV_GITHUB_JOB).unwrap_or_else(|| UNKNOWN_PLACEHOLDER.to_string()),
            run_id: lookup(ENV_GITHUB_RUN_ID),
            server_url: lookup(ENV_GITHUB_SERVER_URL)
                .unwrap_or_else(|| DEFAULT_GITHUB_SERVER_URL.to_string()),
            api_url: lookup(ENV_GITHUB_API_URL).unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string()),
            event_name: lookup(ENV_GITHUB_EVENT_NAME).unwrap_or_default(),
            payload,
        })
    }

    fn load_payload(path: &Path) -> ReporterResult<Value> {
        if !path.exists() {
            log::warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
            return Ok(Value::Object(Default::default()));
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            ReporterError::parse_error("event payload", &format!("{}: {e}", path.display()))
        })
    }

    fn split_slug(slug: &str) -> ReporterResult<(String, String)> {
        match slug.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => {
                Ok((owner.to_string(), repo.to_string()))
            }
            _ => Err(ReporterError::config_error(
                &format!("GITHUB_REPOSITORY must look like 'owner/repo', got '{slug}'"),
                Some(ENV_GITHUB_REPOSITORY),
            )),
        }
    }

    fn repo_from_payload(payload: &Value) -> Option<(String, String)> {
        let owner = payload.pointer("/repository/owner/login")?.as_str()?;
        let repo = payload.pointer("/repository/name")?.as_str()?;
        Some((owner.to_string(), repo.to_string()))
    }

    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub fn run_url(&self) -> String {
        format!(
            "{}/{}/actions/runs/{}",
            self.server_url.trim_end_matches('/'),
            self.repo_slug(),
            self.run_id.as_deref().unwrap_or(UNKNOWN_PLACEHOLDER)
        )
    }

    pub fn is_pull_request(&self) -> bool {
        PULL_REQUEST_EVENTS.contains(&self.event_name.as_str())
    }

    /// `pull_request.number`, else `issue.number`. Zero or non-integer numbers do not count.
    pub fn issue_number(&self) -> Option<u64> {
        self.payload
            .pointer("/pull_request/number")
            .filter(|number| !number.is_null())
            .or_else(|| self.payload.pointer("/issue/number"))
            .and_then(Value::as_u64)
            .filter(|number| *number != 0)
    }
}
