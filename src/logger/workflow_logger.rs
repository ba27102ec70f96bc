use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;
use crate::config::constants::{ENV_GITHUB_OUTPUT, ENV_GITHUB_STEP_SUMMARY};
use crate::errors::{ReporterError, ReporterResult};
use crate::helpers::text_helper::TextHelper;
use crate::traits::workflow_sink::WorkflowSink;

/// Speaks the GitHub Actions runner protocol: `::command::` lines on stdout and
/// appends to the `GITHUB_OUTPUT` / `GITHUB_STEP_SUMMARY` files.
pub struct WorkflowLogger<W: Write = Stdout> {
    out: W,
    output_path: Option<PathBuf>,
    summary_path: Option<PathBuf>,
}

impl WorkflowLogger<Stdout> {
    pub fn from_env(env: &HashMap<String, String>) -> Self {
        let path = |key: &str| {
            env.get(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        Self::new(io::stdout(), path(ENV_GITHUB_OUTPUT), path(ENV_GITHUB_STEP_SUMMARY))
    }
}

impl<W: Write> WorkflowLogger<W> {
    pub const fn new(out: W, output_path: Option<PathBuf>, summary_path: Option<PathBuf>) -> Self {
        Self {
            out,
            output_path,
            summary_path,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            log::warn!("Failed to write workflow command: {e}");
        }
    }

    fn issue_command(&mut self, command: &str, data: &str) {
        let line = format!("::{command}::{}", TextHelper::escape_command_data(data));
        self.write_line(&line);
    }

    fn append_file_command(path: &Path, name: &str, value: &str) -> ReporterResult<()> {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        if name.contains(&delimiter) {
            return Err(ReporterError::workflow_error(
                "Setting output",
                &format!("name should not contain the delimiter \"{delimiter}\""),
            ));
        }
        if value.contains(&delimiter) {
            return Err(ReporterError::workflow_error(
                "Setting output",
                &format!("value should not contain the delimiter \"{delimiter}\""),
            ));
        }

        let mut file = OpenOptions::new().append(true).open(path).map_err(|e| {
            ReporterError::workflow_error(
                "Setting output",
                &format!("Missing file at path: {} ({e})", path.display()),
            )
        })?;
        writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}")?;
        Ok(())
    }
}

impl<W: Write> WorkflowSink for WorkflowLogger<W> {
    fn set_output(&mut self, name: &str, value: &str) -> ReporterResult<()> {
        log::debug!("Setting output {name} ({} bytes)", value.len());

        if let Some(path) = &self.output_path {
            return Self::append_file_command(path, name, value);
        }

        // Runners without GITHUB_OUTPUT still understand the legacy command.
        self.write_line("");
        let line = format!(
            "::set-output name={}::{}",
            TextHelper::escape_command_property(name),
            TextHelper::escape_command_data(value)
        );
        self.write_line(&line);
        Ok(())
    }

    fn write_summary(&mut self, markdown: &str) -> ReporterResult<()> {
        let path = self.summary_path.as_ref().ok_or_else(|| {
            ReporterError::workflow_error(
                "Writing job summary",
                &format!(
                    "Unable to find environment variable for ${ENV_GITHUB_STEP_SUMMARY}. Check if your runtime environment supports job summaries."
                ),
            )
        })?;

        let mut file = OpenOptions::new().append(true).open(path).map_err(|e| {
            ReporterError::workflow_error(
                "Writing job summary",
                &format!(
                    "Unable to access summary file: '{}'. Check if the file has correct read/write permissions. ({e})",
                    path.display()
                ),
            )
        })?;
        file.write_all(markdown.as_bytes())?;
        log::debug!("📝 Job summary written to {}", path.display());
        Ok(())
    }

    fn info(&mut self, message: &str) {
        self.write_line(message);
    }

    fn warning(&mut self, message: &str) {
        self.issue_command("warning", message);
    }

    fn error(&mut self, message: &str) {
        self.issue_command("error", message);
    }

    fn debug(&mut self, message: &str) {
        self.issue_command("debug", message);
    }
}
