//! Separator-driven boundary extraction for prose and source code

use crate::boundary::{sort_boundaries, Boundary, Level};
use crate::error::Result;
use crate::languages::CodeLanguage;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// One entry of a separator hierarchy
#[derive(Debug, Clone)]
pub enum Separator {
    /// Exact text; the empty literal stands for the character level
    Literal(Cow<'static, str>),
    /// Regular expression; the first capture group, when present, is the
    /// boundary region, otherwise the whole match is
    Pattern(Regex),
}

impl Separator {
    /// Literal separator
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Separator::Literal(text.into())
    }

    /// Compile a pattern separator
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Separator::Pattern(Regex::new(pattern)?))
    }

    /// Whether this entry denotes the character level
    pub fn is_character(&self) -> bool {
        matches!(self, Separator::Literal(text) if text.is_empty())
    }

    fn collect(&self, text: &str, level: Level, out: &mut Vec<Boundary>) {
        match self {
            Separator::Literal(separator) if separator.is_empty() => {}
            Separator::Literal(separator) => {
                let break_len = break_prefix_len(separator);
                out.extend(
                    text.match_indices(separator.as_ref())
                        .map(|(start, _)| Boundary::new(level, start, start + break_len)),
                );
            }
            Separator::Pattern(regex) => {
                for captures in regex.captures_iter(text) {
                    let Some(region) = captures.get(1).or_else(|| captures.get(0)) else {
                        continue;
                    };
                    out.push(Boundary::new(level, region.start(), region.end()));
                }
            }
        }
    }
}

/// Bytes of `separator` that belong to the preceding chunk
///
/// An all-whitespace separator is consumed whole. A keyword separator such
/// as `"\nfn "` keeps only its leading line breaks, so the keyword starts the
/// next chunk.
fn break_prefix_len(separator: &str) -> usize {
    if separator.chars().all(char::is_whitespace) {
        return separator.len();
    }
    separator.len() - separator.trim_start_matches(['\n', '\r']).len()
}

/// Separators ordered from coarsest to finest
#[derive(Debug, Clone)]
pub struct SeparatorHierarchy {
    separators: Vec<Separator>,
}

impl SeparatorHierarchy {
    /// Build a hierarchy from separators listed coarsest first
    pub fn new(separators: Vec<Separator>) -> Self {
        Self { separators }
    }

    /// Build a hierarchy of literal separators
    pub fn from_literals(literals: &[&'static str]) -> Self {
        Self::new(
            literals
                .iter()
                .map(|literal| Separator::literal(*literal))
                .collect(),
        )
    }

    /// Paragraph, line, sentence, word, character
    pub fn prose() -> Self {
        prose_hierarchy().clone()
    }

    /// The built-in table for `language`
    pub fn for_language(language: CodeLanguage) -> Self {
        Self::from_literals(language.separators())
    }

    /// The built-in table matching the extension of `file_name`, if any
    pub fn for_file_name(file_name: &str) -> Option<Self> {
        CodeLanguage::from_file_name(file_name).map(Self::for_language)
    }

    /// Separators, coarsest first
    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.separators.len()
    }

    /// Whether the hierarchy has no separators
    pub fn is_empty(&self) -> bool {
        self.separators.is_empty()
    }

    /// Level assigned to the separator at `index` (0 = coarsest)
    pub fn level_of(&self, index: usize) -> Level {
        debug_assert!(index < self.separators.len());
        let depth = self.separators.len() - 1 - index;
        Level(u8::try_from(depth).unwrap_or(u8::MAX))
    }

    /// Record every separator occurrence in `text`, in builder order
    pub fn extract(&self, text: &str) -> Vec<Boundary> {
        let mut boundaries = Vec::new();
        for (index, separator) in self.separators.iter().enumerate() {
            separator.collect(text, self.level_of(index), &mut boundaries);
        }
        sort_boundaries(&mut boundaries);
        boundaries
    }
}

impl Default for SeparatorHierarchy {
    fn default() -> Self {
        Self::prose()
    }
}

/// Sentence ends at level 1 and word gaps at level 0
///
/// Used beneath parsed markup, whose own levels start at 2.
pub(crate) fn collect_sentences_and_words(text: &str, out: &mut Vec<Boundary>) {
    let prose = prose_hierarchy().separators();
    prose[2].collect(text, Level(1), out);
    prose[3].collect(text, Level(0), out);
}

fn prose_hierarchy() -> &'static SeparatorHierarchy {
    static PROSE: OnceLock<SeparatorHierarchy> = OnceLock::new();
    PROSE.get_or_init(|| {
        let compile = |pattern: &str| {
            Separator::Pattern(Regex::new(pattern).expect("static pattern is valid"))
        };
        SeparatorHierarchy::new(vec![
            // paragraph break
            compile(r"(?:\r\n|\r|\n){2,}"),
            // line break
            compile(r"\r\n|\r|\n"),
            // sentence end: the whitespace after terminal punctuation
            compile(r"[.!?]+(\s+)"),
            // word boundary
            compile(r"\s+"),
            Separator::literal(""),
        ])
    })
}
