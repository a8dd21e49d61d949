//! Entry point combining classification, extraction and packing

use crate::boundary::Boundary;
use crate::builder::{ChunkBuilder, TextChunk};
use crate::classifier;
use crate::extractor::{structural, CommonMarkParser, SeparatorHierarchy, StructureParser};
use crate::languages::CodeLanguage;
use crate::normalize::normalize;
use crate::options::SplitterOptions;
use log::debug;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Boundary source chosen for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Separator hierarchy
    Lexical,
    /// Markup parser
    Structural,
}

/// Splits documents into bounded, boundary-aligned chunks
///
/// A splitter built with [`Splitter::new`] classifies every document and
/// parses Markdown structurally. One built with [`Splitter::with_hierarchy`]
/// or [`Splitter::for_language`] always uses its separator hierarchy.
///
/// # Examples
///
/// ```
/// use cleave_core::{Splitter, SplitterOptions};
///
/// let options = SplitterOptions::builder().chunk_size(25).build()?;
/// let splitter = Splitter::new(options);
///
/// let chunks = splitter.split("First sentence here. Second sentence here.");
/// assert_eq!(chunks, vec!["First sentence here.", "Second sentence here."]);
/// # Ok::<(), cleave_core::CleaveError>(())
/// ```
#[derive(Clone)]
pub struct Splitter {
    options: SplitterOptions,
    hierarchy: SeparatorHierarchy,
    explicit_hierarchy: bool,
    parser: Arc<dyn StructureParser>,
}

impl Splitter {
    /// Splitter that picks a route per document
    pub fn new(options: SplitterOptions) -> Self {
        Self {
            options,
            hierarchy: SeparatorHierarchy::prose(),
            explicit_hierarchy: false,
            parser: Arc::new(CommonMarkParser),
        }
    }

    /// Splitter that always uses `hierarchy`
    pub fn with_hierarchy(options: SplitterOptions, hierarchy: SeparatorHierarchy) -> Self {
        Self {
            hierarchy,
            explicit_hierarchy: true,
            ..Self::new(options)
        }
    }

    /// Splitter for source code in `language`
    pub fn for_language(options: SplitterOptions, language: CodeLanguage) -> Self {
        Self::with_hierarchy(options, SeparatorHierarchy::for_language(language))
    }

    /// Replace the markup parser used on the structural route
    pub fn with_parser(mut self, parser: impl StructureParser + 'static) -> Self {
        self.parser = Arc::new(parser);
        self
    }

    /// Active options
    pub fn options(&self) -> &SplitterOptions {
        &self.options
    }

    /// Route that [`chunks`](Self::chunks) would take for `text`
    pub fn route(&self, text: &str) -> Route {
        if self.explicit_hierarchy {
            Route::Lexical
        } else if classifier::is_markup(text) {
            Route::Structural
        } else {
            Route::Lexical
        }
    }

    /// Apply normalization when it is enabled
    ///
    /// [`chunks`](Self::chunks) works on the text it is given; pass it the
    /// result of this method to honour the `normalize` option while keeping
    /// chunk offsets.
    pub fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.normalize() {
            Cow::Owned(normalize(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Split `text` into chunks with their byte offsets
    ///
    /// Normalization is not applied here; see [`prepare`](Self::prepare).
    pub fn chunks<'a>(&self, text: &'a str) -> Vec<TextChunk<'a>> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let boundaries = self.boundaries(text);
        let chunks = ChunkBuilder::new(text, &boundaries, &self.options).build();
        debug!(
            "split {} bytes into {} chunks using {} boundaries",
            text.len(),
            chunks.len(),
            boundaries.len()
        );
        chunks
    }

    /// Split `text` into owned chunk strings, normalizing first if enabled
    pub fn split(&self, text: &str) -> Vec<String> {
        let prepared = self.prepare(text);
        self.chunks(&prepared)
            .into_iter()
            .map(|chunk| chunk.text.to_string())
            .collect()
    }

    fn boundaries(&self, text: &str) -> Vec<Boundary> {
        match self.route(text) {
            Route::Structural => {
                debug!("text classified as markup; using structural boundaries");
                match structural::extract(self.parser.as_ref(), text) {
                    Some(boundaries) => boundaries,
                    None => {
                        debug!("markup parse produced no spans; falling back to separators");
                        self.hierarchy.extract(text)
                    }
                }
            }
            Route::Lexical => {
                debug!(
                    "using {} separator hierarchy with {} levels",
                    if self.explicit_hierarchy { "explicit" } else { "prose" },
                    self.hierarchy.len()
                );
                self.hierarchy.extract(text)
            }
        }
    }
}

impl fmt::Debug for Splitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Splitter")
            .field("options", &self.options)
            .field("levels", &self.hierarchy.len())
            .field("explicit_hierarchy", &self.explicit_hierarchy)
            .finish()
    }
}
