use clap::Args;

/// Raw step inputs. GitHub Actions passes each one as an `INPUT_*` variable.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputArgs {
    /// Raw error text to analyze
    #[clap(long, env = "INPUT_ERROR", hide_env_values = true)]
    pub error: Option<String>,

    /// Bearer token for the analysis API
    #[clap(long, env = "INPUT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Analysis endpoint
    #[clap(long, env = "INPUT_API_URL")]
    pub api_url: Option<String>,

    /// Post the analysis as a pull request comment ("true"/"false")
    #[clap(long, env = "INPUT_COMMENT_PR")]
    pub comment_pr: Option<String>,

    /// Fail the step when the analysis API returns an error ("true"/"false")
    #[clap(long, env = "INPUT_FAIL_ON_API_ERROR")]
    pub fail_on_api_error: Option<String>,

    /// Analysis API request timeout in seconds
    #[clap(long, env = "INPUT_TIMEOUT_SECONDS")]
    pub timeout_seconds: Option<String>,
}
