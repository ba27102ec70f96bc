use crate::enums::comment_outcome::CommentOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Outputs and summary were published.
    Completed { comment: CommentOutcome },
    /// The API rejected the request and `fail_on_api_error` is off; nothing was published.
    ApiErrorIgnored,
}
