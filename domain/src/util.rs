//! Shared utility functions.

/// Shorten text for log lines and progress messages.
///
/// Keeps at most `max_chars` characters and appends `...` when something was
/// cut. Newlines are flattened so one question stays on one log line.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut out: String = flat.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_no_op_when_short() {
        assert_eq!(preview("hi", 10), "hi");
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(preview("hello world", 5), "hello...");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        assert_eq!(preview("あのね", 2), "あの...");
        assert_eq!(preview("あのね", 3), "あのね");
    }

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("line one\nline two", 40), "line one line two");
    }
}
