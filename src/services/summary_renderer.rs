use crate::config::constants::{
    SUMMARY_ERROR_PREVIEW_CHARS, SUMMARY_HEADING, SUMMARY_MAX_DOCS, SUMMARY_MAX_FIXES,
};
use crate::helpers::text_helper::TextHelper;
use crate::structs::analysis::analysis_response::AnalysisResponse;
use crate::structs::summary_builder::SummaryBuilder;

pub struct SummaryRenderer;

impl SummaryRenderer {
    /// Renders the job summary. Sections without content are left out entirely.
    pub fn render(error_text: &str, response: &AnalysisResponse) -> String {
        let analysis = &response.analysis;
        let root_cause = &analysis.root_cause;

        let mut summary = SummaryBuilder::default()
            .add_heading(SUMMARY_HEADING, 1)
            .add_code_block(TextHelper::truncate_chars(error_text, SUMMARY_ERROR_PREVIEW_CHARS), "text");

        if !root_cause.short.is_empty() {
            summary = summary.add_heading("Root cause", 3).add_quote(&root_cause.short);
        }

        if !root_cause.detail.is_empty() {
            summary = summary
                .add_heading("Details", 3)
                .add_code_block(&root_cause.detail, "markdown");
        }

        if !analysis.fixes.is_empty() {
            summary = summary
                .add_heading("Fixes", 3)
                .add_list(analysis.fixes.iter().take(SUMMARY_MAX_FIXES));
        }

        if !analysis.commands.is_empty() {
            summary = summary
                .add_heading("Commands", 3)
                .add_code_block(&analysis.commands.join("\n"), "bash");
        }

        if !analysis.docs.is_empty() {
            summary = summary
                .add_heading("Docs", 3)
                .add_list(analysis.docs.iter().take(SUMMARY_MAX_DOCS));
        }

        summary.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: serde_json::Value) -> AnalysisResponse {
        AnalysisResponse::from_value(value)
    }

    #[test]
    fn renders_the_documented_example() {
        let response = response(json!({
            "analysis": {
                "root_cause": {"short": "null deref", "detail": "x was never initialized"},
                "fixes": ["check init order"],
                "commands": ["npm test"],
                "docs": []
            }
        }));

        let summary = SummaryRenderer::render("TypeError: x is undefined", &response);

        assert_eq!(
            summary,
            "# ExplainThisError — CI Analysis\n\n\
             ```text\nTypeError: x is undefined\n```\n\n\
             ### Root cause\n\n\
             > null deref\n\n\
             ### Details\n\n\
             ```markdown\nx was never initialized\n```\n\n\
             ### Fixes\n\n\
             - check init order\n\n\
             ### Commands\n\n\
             ```bash\nnpm test\n```\n\n"
        );
        assert!(!summary.contains("### Docs"));
    }

    #[test]
    fn empty_analysis_renders_only_heading_and_error() {
        let summary = SummaryRenderer::render("boom", &response(json!({})));
        assert_eq!(summary, "# ExplainThisError — CI Analysis\n\n```text\nboom\n```\n\n");
    }

    #[test]
    fn error_preview_is_limited() {
        let error_text = format!("{}{}", "a".repeat(SUMMARY_ERROR_PREVIEW_CHARS), "TAIL");
        let summary = SummaryRenderer::render(&error_text, &response(json!({})));

        let expected_block = format!("```text\n{}\n```", "a".repeat(SUMMARY_ERROR_PREVIEW_CHARS));
        assert!(summary.contains(&expected_block));
        assert!(!summary.contains("TAIL"));
    }

    #[test]
    fn lists_are_capped_but_commands_are_not() {
        let fixes: Vec<String> = (1..=15).map(|i| format!("fix {i}")).collect();
        let commands: Vec<String> = (1..=20).map(|i| format!("cmd {i}")).collect();
        let docs: Vec<String> = (1..=12).map(|i| format!("doc {i}")).collect();
        let summary = SummaryRenderer::render(
            "boom",
            &response(json!({"analysis": {"fixes": fixes, "commands": commands, "docs": docs}})),
        );

        assert_eq!(summary.matches("- fix ").count(), SUMMARY_MAX_FIXES);
        assert!(!summary.contains("fix 11"));
        assert_eq!(summary.matches("cmd ").count(), 20);
        assert_eq!(summary.matches("- doc ").count(), SUMMARY_MAX_DOCS);
    }

    #[test]
    fn non_string_entries_are_stringified() {
        let summary = SummaryRenderer::render(
            "boom",
            &response(json!({"analysis": {"fixes": [1, {"step": "retry"}]}})),
        );
        assert!(summary.contains("- 1\n"));
        assert!(summary.contains("- {\"step\":\"retry\"}\n"));
    }
}
