use crate::helpers::text_helper::TextHelper;

/// Accumulates a markdown job summary section by section.
#[derive(Default)]
pub struct SummaryBuilder {
    buffer: String,
}

impl SummaryBuilder {
    pub fn add_heading(mut self, text: &str, level: usize) -> Self {
        let level = level.clamp(1, 6);
        self.buffer.push_str(&format!("{} {}\n\n", "#".repeat(level), text));
        self
    }

    pub fn add_code_block(mut self, code: &str, lang: &str) -> Self {
        let fence = TextHelper::code_fence(code);
        self.buffer.push_str(&format!("{fence}{lang}\n{code}\n{fence}\n\n"));
        self
    }

    pub fn add_quote(mut self, text: &str) -> Self {
        for line in text.lines() {
            self.buffer.push_str(&format!("> {line}\n"));
        }
        self.buffer.push('\n');
        self
    }

    pub fn add_list<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.buffer.push_str(&format!("- {}\n", item.as_ref()));
        }
        self.buffer.push('\n');
        self
    }

    pub fn build(self) -> String {
        self.buffer
    }
}
