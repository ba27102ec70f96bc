use std::fmt;

/// Validated inputs for one run.
#[derive(Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    pub error_text: String,
    pub api_key: String,
    pub api_url: String,
    pub comment_pr: bool,
    pub fail_on_api_error: bool,
    pub timeout_secs: u64,
    pub github_token: Option<String>,
}

// Secrets stay out of debug logs.
impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("error_text_chars", &self.error_text.chars().count())
            .field("api_key", &"***")
            .field("api_url", &self.api_url)
            .field("comment_pr", &self.comment_pr)
            .field("fail_on_api_error", &self.fail_on_api_error)
            .field("timeout_secs", &self.timeout_secs)
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .finish()
    }
}
