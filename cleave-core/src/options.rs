//! Splitter configuration

use crate::error::{CleaveError, Result};
use crate::length::LengthFn;

/// Default chunk size in length units
pub const DEFAULT_CHUNK_SIZE: usize = 1500;

/// Validated splitter settings
///
/// Construct through [`SplitterOptions::builder`]; the builder rejects a zero
/// chunk size and an overlap that is not smaller than the chunk size.
#[derive(Debug, Clone)]
pub struct SplitterOptions {
    chunk_size: usize,
    chunk_overlap: usize,
    trim: bool,
    normalize: bool,
    len_fn: LengthFn,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: 0,
            trim: true,
            normalize: false,
            len_fn: LengthFn::default(),
        }
    }
}

impl SplitterOptions {
    /// Create a builder
    pub fn builder() -> SplitterOptionsBuilder {
        SplitterOptionsBuilder::default()
    }

    /// Maximum chunk size in length units
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Maximum overlap between consecutive chunks in length units
    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Whether emitted chunks are stripped of surrounding whitespace
    pub fn trim(&self) -> bool {
        self.trim
    }

    /// Whether whitespace is normalized before splitting
    pub fn normalize(&self) -> bool {
        self.normalize
    }

    /// Size measurement
    pub fn len_fn(&self) -> &LengthFn {
        &self.len_fn
    }

    /// Whether `text` fits in one chunk
    #[inline]
    pub(crate) fn fits(&self, text: &str) -> bool {
        self.len_fn.measure(text) <= self.chunk_size
    }

    /// Whether `text` fits in the overlap window
    #[inline]
    pub(crate) fn fits_overlap(&self, text: &str) -> bool {
        self.len_fn.measure(text) <= self.chunk_overlap
    }
}

/// Builder for [`SplitterOptions`]
#[derive(Debug, Default)]
pub struct SplitterOptionsBuilder {
    options: SplitterOptions,
}

impl SplitterOptionsBuilder {
    /// Set the maximum chunk size
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.options.chunk_size = size;
        self
    }

    /// Set the overlap between consecutive chunks
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.options.chunk_overlap = overlap;
        self
    }

    /// Strip whitespace around emitted chunks
    pub fn trim(mut self, trim: bool) -> Self {
        self.options.trim = trim;
        self
    }

    /// Normalize whitespace before splitting
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.options.normalize = normalize;
        self
    }

    /// Set the size measurement
    pub fn len_fn(mut self, len_fn: LengthFn) -> Self {
        self.options.len_fn = len_fn;
        self
    }

    /// Validate and build the options
    pub fn build(self) -> Result<SplitterOptions> {
        let options = self.options;

        if options.chunk_size == 0 {
            return Err(CleaveError::InvalidConfig(
                "chunk size must be greater than 0".to_string(),
            ));
        }

        if options.chunk_overlap >= options.chunk_size {
            return Err(CleaveError::InvalidConfig(format!(
                "chunk overlap ({}) must be smaller than chunk size ({})",
                options.chunk_overlap, options.chunk_size
            )));
        }

        Ok(options)
    }
}
