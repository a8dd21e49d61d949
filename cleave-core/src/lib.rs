//! Boundary-aware text chunking
//!
//! `cleave-core` cuts documents into ordered chunks of bounded size, breaking
//! at the strongest boundary that still fits: headings before blocks, blocks
//! before sentences, sentences before words, words before characters.
//!
//! Two boundary sources feed one packing algorithm:
//!
//! - a separator hierarchy for prose and for source code in twelve languages
//! - a CommonMark parser for Markdown, selected automatically when the
//!   document shows at least two kinds of Markdown syntax
//!
//! Sizes are measured with a pluggable [`LengthFn`] (Unicode scalar values by
//! default) and chunks may overlap by a bounded amount.
//!
//! # Examples
//!
//! ```
//! use cleave_core::{segment, SegmentOptions};
//!
//! let text = "Mr. Fox jumped.\n[...]\r\n\r\nThe dog was too lazy. It just sat there.";
//! let segments = segment(text, &SegmentOptions::with_length(18))?;
//!
//! assert_eq!(segments[0].text, "Mr. Fox jumped.");
//! assert_eq!(segments.last().unwrap().text, "It just sat there.");
//! # Ok::<(), cleave_core::CleaveError>(())
//! ```

#![warn(missing_docs)]

pub mod boundary;
mod builder;
pub mod classifier;
pub mod error;
pub mod extractor;
pub mod languages;
pub mod length;
pub mod normalize;
pub mod options;
pub mod segment;
pub mod splitter;

// Re-export key types
pub use boundary::{Boundary, Level};
pub use builder::TextChunk;
pub use classifier::{classify, is_markup, Classification, Indicator};
pub use error::{CleaveError, Result};
pub use extractor::{
    CommonMarkParser, Separator, SeparatorHierarchy, Span, SpanKind, StructureParser,
};
pub use languages::CodeLanguage;
pub use length::LengthFn;
pub use normalize::normalize;
pub use options::{SplitterOptions, SplitterOptionsBuilder, DEFAULT_CHUNK_SIZE};
pub use segment::{segment, Segment, SegmentOptions};
pub use splitter::{Route, Splitter};
