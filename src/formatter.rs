//! Failure message layout.

use std::panic::Location;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Combine an optional description with a failure message.
///
/// The description is wrapped at `width` display columns and separated from
/// the message by a blank line. A `width` of zero disables wrapping.
pub fn format_error_message(description: Option<&str>, message: &str, width: usize) -> String {
    match description.map(str::trim) {
        Some(description) if !description.is_empty() => {
            format!("{}\n\n{}", wrap(description, width).join("\n"), message)
        }
        _ => message.to_string(),
    }
}

/// Append the source location of the failing call.
pub fn with_location(message: &str, location: &Location<'_>) -> String {
    format!(
        "{}\n  --> {}:{}:{}",
        message,
        location.file(),
        location.line(),
        location.column()
    )
}

/// Greedy word wrap on unicode word boundaries.
///
/// Words wider than `width` are kept whole on their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.lines().map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_word_bounds() {
            let word_width = UnicodeWidthStr::width(word);
            if line_width + word_width > width && !line.trim().is_empty() {
                lines.push(line.trim_end().to_string());
                line.clear();
                line_width = 0;
                if word.trim().is_empty() {
                    continue;
                }
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line.trim_end().to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_description_passes_message_through() {
        assert_eq!(
            format_error_message(None, "expected true, but false", 80),
            "expected true, but false"
        );
        assert_eq!(
            format_error_message(Some("   "), "expected true, but false", 80),
            "expected true, but false"
        );
    }

    #[test]
    fn test_description_above_message() {
        let output = format_error_message(
            Some("User ID should match"),
            "values are not matched\nactual: 1\nexpect: 2",
            80,
        );

        insta::assert_snapshot!(output, @r###"
        User ID should match

        values are not matched
        actual: 1
        expect: 2
        "###);
    }

    #[test]
    fn test_wrap_long_description() {
        let lines = wrap(
            "Array should contain all expected fruits including orange and grape",
            30,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(UnicodeWidthStr::width(line.as_str()) <= 30, "too wide: {:?}", line);
            assert!(!line.starts_with(' '));
        }
        assert_eq!(
            lines.join(" "),
            "Array should contain all expected fruits including orange and grape"
        );
    }

    #[test]
    fn test_wrap_counts_display_width() {
        // Each ideograph occupies two columns.
        let lines = wrap("用户 编号 必须 匹配", 10);
        assert_eq!(lines, vec!["用户 编号", "必须 匹配"]);
    }

    #[test]
    fn test_wrap_keeps_overlong_word() {
        let lines = wrap("a supercalifragilistic word", 5);
        assert!(lines.contains(&"supercalifragilistic".to_string()));
    }

    #[test]
    fn test_with_location() {
        let location = Location::caller();
        let output = with_location("expected nil, but got 1 (i32)", location);
        assert!(output.starts_with("expected nil, but got 1 (i32)\n  --> "));
        assert!(output.contains("formatter.rs"));
    }
}
