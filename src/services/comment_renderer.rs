use crate::config::constants::{COMMENT_HEADING, COMMENT_MAX_COMMANDS, COMMENT_MAX_DOCS, COMMENT_MAX_FIXES};
use crate::structs::analysis::analysis_response::AnalysisResponse;

pub struct CommentRenderer;

impl CommentRenderer {
    /// Pull request comment body: the summary's content, condensed, with a link to the run.
    pub fn render(response: &AnalysisResponse, run_url: &str) -> String {
        let analysis = &response.analysis;
        let root_cause = &analysis.root_cause;
        let mut lines: Vec<String> = vec![COMMENT_HEADING.to_string()];

        if !root_cause.short.is_empty() {
            lines.push(format!("**Root cause:** {}", root_cause.short));
        }

        if !root_cause.detail.is_empty() {
            lines.push("<details><summary>Details</summary>\n\n".to_string());
            lines.push(root_cause.detail.clone());
            lines.push("\n</details>".to_string());
        }

        if !analysis.fixes.is_empty() {
            lines.push("\n**Fixes:**".to_string());
            lines.extend(analysis.fixes.iter().take(COMMENT_MAX_FIXES).map(|fix| format!("- {fix}")));
        }

        if !analysis.commands.is_empty() {
            lines.push("\n**Commands:**".to_string());
            lines.push("```bash".to_string());
            lines.extend(analysis.commands.iter().take(COMMENT_MAX_COMMANDS).cloned());
            lines.push("```".to_string());
        }

        if !analysis.docs.is_empty() {
            lines.push("\n**Docs:**".to_string());
            lines.extend(analysis.docs.iter().take(COMMENT_MAX_DOCS).map(|doc| format!("- {doc}")));
        }

        lines.push(format!("\n_Run:_ {run_url}"));
        lines.join("\n")
    }
}
