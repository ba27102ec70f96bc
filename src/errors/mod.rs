use thiserror::Error;

/// Every failure the reporter can surface. Only `ApiError` has a non-fatal path.
#[derive(Debug, Clone, Error)]
pub enum ReporterError {
    // Configuration errors
    #[error("{message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
    },

    // Analysis API rejected the request
    #[error("{message}")]
    ApiError {
        status_code: u16,
        message: String,
    },

    // Network/transport errors
    #[error("Network error during {operation}: {reason}")]
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    #[error("Parse error in {content_type}: {reason}")]
    ParseError {
        content_type: String,
        reason: String,
    },

    // GitHub REST API rejected the comment
    #[error("GitHub API {status_code}: {message}")]
    GitHubError {
        status_code: u16,
        message: String,
    },

    // Output/summary file commands
    #[error("{operation} failed: {reason}")]
    WorkflowCommandError {
        operation: String,
        reason: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ReporterError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
        }
    }

    pub fn missing_input(name: &str) -> Self {
        Self::config_error(&format!("Input required and not supplied: {name}"), Some(name))
    }

    pub fn api_error(status_code: u16, message: &str) -> Self {
        Self::ApiError {
            status_code,
            message: message.to_string(),
        }
    }

    pub fn github_error(status_code: u16, message: &str) -> Self {
        Self::GitHubError {
            status_code,
            message: message.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn workflow_error(operation: &str, reason: &str) -> Self {
        Self::WorkflowCommandError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::ApiError { .. })
    }

    /// The text surfaced to the CI platform as the failure reason. reqwest already
    /// names the URL in its error text, so the `url` field stays in the technical details.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

/// Result type alias for reporter operations
pub type ReporterResult<T> = Result<T, ReporterError>;

impl From<std::io::Error> for ReporterError {
    fn from(error: std::io::Error) -> Self {
        Self::system_error("I/O operation", &error.to_string())
    }
}

impl From<serde_json::Error> for ReporterError {
    fn from(error: serde_json::Error) -> Self {
        Self::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for ReporterError {
    fn from(error: reqwest::Error) -> Self {
        let operation = if error.is_timeout() {
            "HTTP request (timed out)"
        } else if error.is_decode() {
            "HTTP response decoding"
        } else {
            "HTTP request"
        };

        Self::NetworkError {
            operation: operation.to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}
