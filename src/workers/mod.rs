pub mod analysis_runner;
pub mod command_runner;
