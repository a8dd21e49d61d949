//! Markdown detection heuristics
//!
//! A document is treated as markup only when at least two different kinds
//! of Markdown syntax appear in it. A stray `#` or `-` in prose is not
//! enough.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Minimum number of distinct indicators for a markup verdict
pub const MARKUP_THRESHOLD: usize = 2;

/// A structural feature of Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// `# Heading` through `###### Heading`
    AtxHeading,
    /// ```` ``` ```` or `~~~` at the start of a line
    CodeFence,
    /// `- item`, `* item`, `+ item` or `1. item`
    List,
    /// `[text](url)` or `![alt](url)`
    Link,
    /// `> quote`
    Blockquote,
    /// `---`, `***` or `___` on a line of its own
    HorizontalRule,
}

impl Indicator {
    /// All indicators in evaluation order
    pub const ALL: [Indicator; 6] = [
        Indicator::AtxHeading,
        Indicator::CodeFence,
        Indicator::List,
        Indicator::Link,
        Indicator::Blockquote,
        Indicator::HorizontalRule,
    ];

    /// Short lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Indicator::AtxHeading => "heading",
            Indicator::CodeFence => "code-fence",
            Indicator::List => "list",
            Indicator::Link => "link",
            Indicator::Blockquote => "blockquote",
            Indicator::HorizontalRule => "horizontal-rule",
        }
    }

    fn is_present(&self, text: &str) -> bool {
        let patterns = patterns();
        match self {
            Indicator::AtxHeading => patterns.atx_heading.is_match(text),
            Indicator::CodeFence => patterns.code_fence.is_match(text),
            Indicator::List => {
                patterns.unordered_list.is_match(text) || patterns.ordered_list.is_match(text)
            }
            Indicator::Link => patterns.link.is_match(text),
            Indicator::Blockquote => patterns.blockquote.is_match(text),
            Indicator::HorizontalRule => patterns.horizontal_rule.is_match(text),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Patterns {
    atx_heading: Regex,
    code_fence: Regex,
    unordered_list: Regex,
    ordered_list: Regex,
    link: Regex,
    blockquote: Regex,
    horizontal_rule: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let compile = |pattern: &str| Regex::new(pattern).expect("static pattern is valid");
        Patterns {
            atx_heading: compile(r"(?m)^#{1,6}\s+.+$"),
            code_fence: compile(r"(?m)^```|^~~~"),
            unordered_list: compile(r"(?m)^\s*[-*+]\s+.+$"),
            ordered_list: compile(r"(?m)^\s*\d+\.\s+.+$"),
            link: compile(r"!?\[([^\]]+)\]\(([^)]+)\)"),
            blockquote: compile(r"(?m)^>\s+.+$"),
            horizontal_rule: compile(r"(?m)^\s*(-{3,}|\*{3,}|_{3,})\s*$"),
        }
    })
}

/// Result of classifying a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    indicators: Vec<Indicator>,
}

impl Classification {
    /// Distinct indicators found, in evaluation order
    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    /// Whether the document counts as Markdown
    pub fn is_markup(&self) -> bool {
        self.indicators.len() >= MARKUP_THRESHOLD
    }
}

/// Evaluate every indicator against `text`
pub fn classify(text: &str) -> Classification {
    if text.trim().is_empty() {
        return Classification {
            indicators: Vec::new(),
        };
    }

    let indicators = Indicator::ALL
        .into_iter()
        .filter(|indicator| indicator.is_present(text))
        .collect();

    Classification { indicators }
}

/// Whether `text` should be split as Markdown
pub fn is_markup(text: &str) -> bool {
    classify(text).is_markup()
}
