pub mod analysis;
pub mod analysis_request;
pub mod cli;
pub mod comment_target;
pub mod config;
pub mod input_args;
pub mod run_context;
pub mod summary_builder;
