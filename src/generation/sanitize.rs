// Strip comment-style annotations from raw model output before JSON parsing.
// Models sometimes emit `// ...` trailers despite the prompt forbidding them.

use std::sync::LazyLock;

use regex::Regex;

static LINE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"//.*").unwrap());

/// Remove `//` comments (to end of line) from a JSON-ish string.
///
/// Purely lexical: a `//` inside a quoted value is stripped too. Known
/// limitation — a title legitimately containing `//` gets corrupted.
pub fn strip_line_comments(raw: &str) -> String {
    LINE_COMMENT.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_comment_removed_content_preserved() {
        let raw = "{\"key\": \"value\"} // this is a comment\n{\"foo\": \"bar\"}";
        let cleaned = strip_line_comments(raw);
        assert!(!cleaned.contains("//"));
        assert!(cleaned.contains("\"key\": \"value\""));
        assert!(cleaned.contains("\"foo\": \"bar\""));
    }

    #[test]
    fn comment_only_removed_to_end_of_line() {
        let raw = "[1, 2] // trailing\n[3, 4]";
        assert_eq!(strip_line_comments(raw), "[1, 2] \n[3, 4]");
    }

    #[test]
    fn text_without_comments_unchanged() {
        let raw = r#"[{"title": "Cars", "options": []}]"#;
        assert_eq!(strip_line_comments(raw), raw);
    }

    #[test]
    fn comment_on_every_line_removed() {
        let raw = "a // one\nb // two\nc";
        assert_eq!(strip_line_comments(raw), "a \nb \nc");
    }

    #[test]
    fn double_slash_inside_quoted_value_also_stripped() {
        // Documented limitation: stripping is not string-literal aware.
        let raw = r#"{"title": "http://example.com"}"#;
        let cleaned = strip_line_comments(raw);
        assert!(!cleaned.contains("//"));
        assert!(cleaned.starts_with(r#"{"title": "http:"#));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(strip_line_comments(""), "");
    }
}
