use std::process::ExitCode;
use clap::Parser;
use explain_error_action::config::constants::ENV_RUNNER_DEBUG;
use explain_error_action::logger::workflow_logger::WorkflowLogger;
use explain_error_action::structs::cli::Cli;
use explain_error_action::traits::workflow_sink::WorkflowSink;
use explain_error_action::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> ExitCode {
    let default_level = match std::env::var(ENV_RUNNER_DEBUG).as_deref() {
        Ok("1") => "debug",
        _ => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let cli = Cli::parse();
    let env = CommandRunner::process_env();
    let mut sink = WorkflowLogger::from_env(&env);
    let runner = CommandRunner::with_env(env);

    match runner.run_command(cli.command, &mut sink).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{}", e.technical_details());
            sink.error(&e.user_message());
            ExitCode::FAILURE
        }
    }
}
