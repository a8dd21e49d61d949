//! Markup-driven boundary extraction
//!
//! A [`StructureParser`] flattens the document tree into [`Span`]s. Each span
//! kind maps to a fixed [`Level`], so the builder can treat markup the same
//! way it treats separator hits. Sentence ends (level 1) and word gaps
//! (level 0) sit beneath the parsed spans so long paragraphs still break
//! between words.

use crate::boundary::{sort_boundaries, Boundary, Level};
use crate::extractor::lexical;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag};

/// Semantic role of a parsed span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text runs, emphasis, code spans, links, images, raw inline markup
    Inline,
    /// Soft or hard line break
    Break,
    /// Paragraph, code block, raw block, quote, list, list item or table
    Block,
    /// Horizontal rule
    Rule,
    /// Heading of the given depth, 1 (top) to 6
    Heading(u8),
}

impl SpanKind {
    /// Break strength of this kind
    pub fn level(&self) -> Level {
        match self {
            SpanKind::Inline => Level(2),
            SpanKind::Break => Level(3),
            SpanKind::Block => Level(4),
            SpanKind::Rule => Level(5),
            SpanKind::Heading(depth) => Level(12 - (*depth).clamp(1, 6)),
        }
    }
}

/// A parsed element and the bytes it covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Element kind
    pub kind: SpanKind,
    /// First covered byte
    pub start: usize,
    /// One past the last covered byte
    pub end: usize,
}

impl Span {
    /// Create a span
    pub fn new(kind: SpanKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// Document-structure parser producing a flat span list
///
/// Implementations must be permissive: malformed input yields whatever spans
/// can be recovered, never an error.
pub trait StructureParser: Send + Sync {
    /// Parse `text` into spans with byte ranges into `text`
    fn parse(&self, text: &str) -> Vec<Span>;
}

/// CommonMark parser with tables and strikethrough enabled
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonMarkParser;

impl CommonMarkParser {
    fn options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn tag_kind(tag: &Tag<'_>) -> Option<SpanKind> {
    match tag {
        Tag::Heading { level, .. } => Some(SpanKind::Heading(heading_depth(*level))),
        Tag::Paragraph
        | Tag::CodeBlock(_)
        | Tag::HtmlBlock
        | Tag::BlockQuote(_)
        | Tag::List(_)
        | Tag::Item
        | Tag::Table(_) => Some(SpanKind::Block),
        Tag::Emphasis
        | Tag::Strong
        | Tag::Strikethrough
        | Tag::Link { .. }
        | Tag::Image { .. } => Some(SpanKind::Inline),
        _ => None,
    }
}

impl StructureParser for CommonMarkParser {
    fn parse(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        for (event, range) in Parser::new_ext(text, Self::options()).into_offset_iter() {
            let kind = match &event {
                Event::Start(tag) => tag_kind(tag),
                Event::Text(_) | Event::Code(_) | Event::InlineHtml(_) | Event::Html(_) => {
                    Some(SpanKind::Inline)
                }
                Event::SoftBreak | Event::HardBreak => Some(SpanKind::Break),
                Event::Rule => Some(SpanKind::Rule),
                _ => None,
            };
            if let Some(kind) = kind {
                spans.push(Span::new(kind, range.start, range.end));
            }
        }
        spans
    }
}

/// Turn spans into sorted boundaries
///
/// Returns `None` when no span survives, so the caller can fall back to
/// separator-based extraction.
pub fn extract(parser: &dyn StructureParser, text: &str) -> Option<Vec<Boundary>> {
    let mut boundaries = Vec::new();

    for span in parser.parse(text) {
        let end = span.end.min(text.len());
        if span.start >= end || !text.is_char_boundary(span.start) || !text.is_char_boundary(end)
        {
            continue;
        }

        // Breaks are whitespace themselves; everything else loses its trailing whitespace
        let end = match span.kind {
            SpanKind::Break => end,
            _ => span.start + text[span.start..end].trim_end().len(),
        };
        if end == span.start {
            continue;
        }

        boundaries.push(Boundary::new(span.kind.level(), span.start, end));
    }

    if boundaries.is_empty() {
        return None;
    }
    lexical::collect_sentences_and_words(text, &mut boundaries);
    sort_boundaries(&mut boundaries);
    Some(boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoSpans;

    impl StructureParser for NoSpans {
        fn parse(&self, _text: &str) -> Vec<Span> {
            Vec::new()
        }
    }

    fn kinds(text: &str) -> Vec<SpanKind> {
        CommonMarkParser.parse(text).into_iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_levels() {
        assert_eq!(SpanKind::Heading(1).level(), Level(11));
        assert_eq!(SpanKind::Heading(6).level(), Level(6));
        assert_eq!(SpanKind::Inline.level(), Level(2));
        assert!(SpanKind::Heading(6).level() > SpanKind::Rule.level());
        assert!(SpanKind::Rule.level() > SpanKind::Block.level());
        assert!(SpanKind::Block.level() > SpanKind::Break.level());
        assert!(SpanKind::Break.level() > SpanKind::Inline.level());
    }

    #[test]
    fn test_parse_heading_and_paragraph() {
        let kinds = kinds("# Title\n\nSome *text* here.");
        assert_eq!(kinds[0], SpanKind::Heading(1));
        assert!(kinds.contains(&SpanKind::Block));
        assert!(kinds.contains(&SpanKind::Inline));
    }

    #[test]
    fn test_parse_rule_and_breaks() {
        let kinds = kinds("one\ntwo\n\n---\n\nthree");
        assert!(kinds.contains(&SpanKind::Break));
        assert!(kinds.contains(&SpanKind::Rule));
    }

    #[test]
    fn test_heading_covers_its_line() {
        let text = "Intro.\n\n## Section\n\nBody.";
        let boundaries = extract(&CommonMarkParser, text).unwrap();
        let heading_start = text.find("## ").unwrap();

        let heading = boundaries
            .iter()
            .find(|b| b.level == SpanKind::Heading(2).level())
            .expect("h2 boundary");
        assert_eq!(&text[heading.start..heading.end], "## Section");
        assert_eq!(heading.start, heading_start);
    }

    #[test]
    fn test_setext_heading_spans_both_lines() {
        let text = "Title\n=====\n\nBody text.";
        let boundaries = extract(&CommonMarkParser, text).unwrap();
        let heading = boundaries
            .iter()
            .find(|b| b.level == SpanKind::Heading(1).level())
            .expect("h1 boundary");
        assert_eq!(&text[heading.start..heading.end], "Title\n=====");
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        let text = "First paragraph.   \n\nSecond.";
        let boundaries = extract(&CommonMarkParser, text).unwrap();
        let spans = boundaries
            .iter()
            .filter(|b| b.level >= SpanKind::Inline.level() && b.level != SpanKind::Break.level());
        for boundary in spans {
            let covered = &text[boundary.start..boundary.end];
            assert_eq!(covered, covered.trim_end());
        }
    }

    #[test]
    fn test_boundaries_sorted_and_on_char_boundaries() {
        let text = "# Größe\n\n- naïve\n- 日本語テキスト\n\n> 引用 **強調**\n";
        let boundaries = extract(&CommonMarkParser, text).unwrap();
        assert!(crate::boundary::is_sorted(&boundaries));
        for boundary in &boundaries {
            assert!(text.is_char_boundary(boundary.start));
            assert!(text.is_char_boundary(boundary.end));
            assert!(boundary.end <= text.len());
        }
    }

    #[test]
    fn test_words_and_sentences_beneath_spans() {
        let text = "# A\n\nOne two. Three four.";
        let boundaries = extract(&CommonMarkParser, text).unwrap();
        let sentence = text.find(". ").unwrap() + 1;
        assert!(boundaries.contains(&Boundary::new(Level(1), sentence, sentence + 1)));
        assert!(boundaries.contains(&Boundary::new(Level(0), sentence, sentence + 1)));
        assert!(boundaries
            .iter()
            .filter(|b| b.level < SpanKind::Inline.level())
            .all(|b| text[b.start..b.end].trim().is_empty()));
    }

    #[test]
    fn test_no_spans_means_no_boundaries() {
        assert!(extract(&NoSpans, "anything").is_none());
        assert!(extract(&CommonMarkParser, "").is_none());
    }

    #[test]
    fn test_permissive_on_malformed_markup() {
        let text = "```\nunterminated fence\n\n* [broken](link\n";
        assert!(extract(&CommonMarkParser, text).is_some());
    }
}
