/// What happened to the optional pull request comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentOutcome {
    Posted { issue_number: u64 },
    Disabled,
    NotPullRequest,
    MissingToken,
    MissingIssueNumber,
}

impl CommentOutcome {
    pub const fn skip_message(&self) -> Option<&'static str> {
        match self {
            Self::Posted { .. } => None,
            Self::Disabled => Some("PR commenting disabled; skipping PR comment."),
            Self::NotPullRequest => Some("Event is not a pull request; skipping PR comment."),
            Self::MissingToken => Some("GITHUB_TOKEN not provided; skipping PR comment."),
            Self::MissingIssueNumber => Some("No PR number in context; skipping PR comment."),
        }
    }
}
