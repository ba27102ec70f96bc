/// The issue or pull request a comment is posted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTarget {
    pub owner: String,
    pub repo: String,
    pub issue_number: u64,
}
