//! GitHub Actions step that sends a CI failure to the ExplainThisError analysis API
//! and publishes the diagnosis as step outputs, a job summary and a PR comment.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
