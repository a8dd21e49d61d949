//! Request-level API used by callers that only know lengths and file names

use crate::error::Result;
use crate::languages::CodeLanguage;
use crate::options::{SplitterOptions, DEFAULT_CHUNK_SIZE};
use crate::splitter::Splitter;
use log::debug;

/// Segmentation request options
///
/// Every field is optional. Missing lengths fall back to the defaults; a
/// `file_name` with a known source-code extension selects that language's
/// separators instead of content classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmentOptions {
    /// Maximum segment size in characters
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub segment_length: Option<usize>,
    /// Characters shared by consecutive segments
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub segment_overlap: Option<usize>,
    /// Name of the source document
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub file_name: Option<String>,
}

impl SegmentOptions {
    /// Options with the given segment length
    pub fn with_length(length: usize) -> Self {
        Self {
            segment_length: Some(length),
            ..Self::default()
        }
    }

    /// Set the overlap
    pub fn overlap(mut self, overlap: usize) -> Self {
        self.segment_overlap = Some(overlap);
        self
    }

    /// Set the file name
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Language selected by `file_name`, if any
    pub fn language(&self) -> Option<CodeLanguage> {
        self.file_name
            .as_deref()
            .and_then(CodeLanguage::from_file_name)
    }

    /// Validated splitter options for this request
    pub fn splitter_options(&self) -> Result<SplitterOptions> {
        SplitterOptions::builder()
            .chunk_size(self.segment_length.unwrap_or(DEFAULT_CHUNK_SIZE))
            .chunk_overlap(self.segment_overlap.unwrap_or(0))
            .build()
    }

    /// Splitter for this request
    pub fn splitter(&self) -> Result<Splitter> {
        let options = self.splitter_options()?;
        Ok(match self.language() {
            Some(language) => {
                debug!("file name selects {} separators", language.name());
                Splitter::for_language(options, language)
            }
            None => Splitter::new(options),
        })
    }
}

/// One output segment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Segment text
    pub text: String,
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// Split `text` into segments
///
/// Fails only when the options are invalid (zero length, or an overlap not
/// smaller than the length).
///
/// # Examples
///
/// ```
/// use cleave_core::{segment, SegmentOptions};
///
/// let options = SegmentOptions::with_length(50);
/// let segments = segment("# Title\n\nThis is a paragraph.", &options)?;
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].text, "# Title\n\nThis is a paragraph.");
/// # Ok::<(), cleave_core::CleaveError>(())
/// ```
pub fn segment(text: &str, options: &SegmentOptions) -> Result<Vec<Segment>> {
    let splitter = options.splitter()?;
    Ok(splitter.split(text).into_iter().map(Segment::from).collect())
}
