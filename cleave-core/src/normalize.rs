//! Whitespace normalization applied before splitting when requested

use regex::Regex;
use std::sync::OnceLock;

/// Placeholder for line breaks while other whitespace is collapsed
const BREAK_MARKER: char = '\u{7}';

fn paragraph_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\n\s*\n\s*").expect("static pattern is valid"))
}

fn line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\n\s*").expect("static pattern is valid"))
}

/// Collapse whitespace while keeping paragraph and line structure
///
/// Windows line endings become `\n`, a run of blank lines becomes a single
/// `\n\n`, a line break followed by indentation becomes `\n`, and every
/// other whitespace run becomes one space. The result is trimmed.
pub fn normalize(text: &str) -> String {
    let text = text
        .trim()
        .replace(BREAK_MARKER, "")
        .replace("\r\n", "\n");

    let text = paragraph_pattern().replace_all(&text, "\u{7}\u{7}");
    let text = line_pattern().replace_all(&text, "\u{7}");

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    collapsed
        .replace(BREAK_MARKER, "\n")
        .trim()
        .to_string()
}
