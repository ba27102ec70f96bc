use std::collections::HashMap;
use crate::config::constants::{
    DEFAULT_API_TIMEOUT_SECS, DEFAULT_API_URL, DEFAULT_COMMENT_PR, DEFAULT_FAIL_ON_API_ERROR,
    INPUT_API_KEY, INPUT_ERROR, INPUT_TIMEOUT_SECONDS, TOKEN_ENV_VARS,
};
use crate::errors::{ReporterError, ReporterResult};
use crate::helpers::text_helper::TextHelper;
use crate::structs::config::reporter_config::ReporterConfig;
use crate::structs::input_args::InputArgs;

pub struct ConfigManager;

impl ConfigManager {
    /// Resolves raw inputs into a validated config. Inputs are trimmed and an empty
    /// value counts as not supplied.
    pub fn load(inputs: &InputArgs, env: &HashMap<String, String>) -> ReporterResult<ReporterConfig> {
        let error_text = Self::required(inputs.error.as_deref(), INPUT_ERROR)?;
        let api_key = Self::required(inputs.api_key.as_deref(), INPUT_API_KEY)?;

        let api_url = Self::optional(inputs.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .to_string();
        let comment_pr = TextHelper::is_truthy_flag(
            Self::optional(inputs.comment_pr.as_deref()).unwrap_or(DEFAULT_COMMENT_PR),
        );
        let fail_on_api_error = TextHelper::is_truthy_flag(
            Self::optional(inputs.fail_on_api_error.as_deref()).unwrap_or(DEFAULT_FAIL_ON_API_ERROR),
        );
        let timeout_secs = match Self::optional(inputs.timeout_seconds.as_deref()) {
            Some(raw) => Self::parse_timeout(raw)?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        let github_token = TOKEN_ENV_VARS
            .iter()
            .find_map(|key| env.get(*key).map(|v| v.trim()).filter(|v| !v.is_empty()))
            .map(str::to_string);

        Ok(ReporterConfig {
            error_text,
            api_key,
            api_url,
            comment_pr,
            fail_on_api_error,
            timeout_secs,
            github_token,
        })
    }

    fn required(value: Option<&str>, name: &str) -> ReporterResult<String> {
        Self::optional(value)
            .map(str::to_string)
            .ok_or_else(|| ReporterError::missing_input(name))
    }

    fn optional(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    fn parse_timeout(raw: &str) -> ReporterResult<u64> {
        match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(secs),
            _ => Err(ReporterError::config_error(
                &format!("Input {INPUT_TIMEOUT_SECONDS} must be a positive integer, got '{raw}'"),
                Some(INPUT_TIMEOUT_SECONDS),
            )),
        }
    }
}
