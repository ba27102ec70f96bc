pub mod analysis_client;
pub mod comment_renderer;
pub mod github_comment_client;
pub mod output_publisher;
pub mod request_builder;
pub mod summary_renderer;
