pub mod commands;
pub mod comment_outcome;
pub mod run_outcome;
