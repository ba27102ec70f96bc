use async_trait::async_trait;
use crate::errors::ReporterResult;
use crate::structs::comment_target::CommentTarget;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentClient: Send + Sync {
    /// Creates a new comment. Existing comments are never edited.
    async fn create_comment(&self, target: &CommentTarget, body: &str) -> ReporterResult<()>;
}
