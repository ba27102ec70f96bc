pub mod analysis_api;
pub mod comment_client;
pub mod workflow_sink;
