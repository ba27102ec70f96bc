pub struct TextHelper;

impl TextHelper {
    /// Returns at most `max_chars` characters of `text`, never splitting a character.
    pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
        match text.char_indices().nth(max_chars) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }

    /// Escapes the data part of a `::command::data` workflow command.
    pub fn escape_command_data(data: &str) -> String {
        data.replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A")
    }

    /// Escapes a `key=value` property of a workflow command.
    pub fn escape_command_property(value: &str) -> String {
        Self::escape_command_data(value)
            .replace(':', "%3A")
            .replace(',', "%2C")
    }

    /// A backtick fence that cannot be closed early by the content it wraps.
    pub fn code_fence(content: &str) -> String {
        let mut longest = 0;
        let mut current = 0;
        for ch in content.chars() {
            if ch == '`' {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }

        "`".repeat((longest + 1).max(3))
    }

    pub fn is_truthy_flag(value: &str) -> bool {
        value.trim().eq_ignore_ascii_case("true")
    }
}
