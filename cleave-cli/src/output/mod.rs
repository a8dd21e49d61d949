//! Output formatting module

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// One segment ready for output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    /// Source file
    pub file: String,
    /// Position of the segment within its file, from 0
    pub index: usize,
    /// Segment text
    pub text: String,
    /// Byte offset within the (normalized) document
    pub offset: usize,
    /// Size in the configured length unit
    pub length: usize,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the segments of each file
    fn begin_file(&mut self, _file: &str, _segment_count: usize) -> Result<()> {
        Ok(())
    }

    /// Format and output a single segment
    fn format_segment(&mut self, segment: &SegmentRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, segments separated by a rule
    Text,
    /// JSON array of segments with metadata
    Json,
    /// Markdown sections per file
    Markdown,
}

impl OutputFormat {
    /// Every format
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    /// Lowercase name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text with segments separated by a rule",
            OutputFormat::Json => "JSON array of {file, index, text, offset, length}",
            OutputFormat::Markdown => "Markdown sections per file with a total",
        }
    }
}

/// Display options shared by the formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Pretty-print JSON
    pub pretty_json: bool,
    /// Show offsets and lengths in text and Markdown output
    pub include_metadata: bool,
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    options: FormatOptions,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options.include_metadata)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options.pretty_json)),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, options.include_metadata))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory writer for formatter tests
    #[derive(Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::SharedBuffer;
    use super::*;

    fn record(index: usize, text: &str) -> SegmentRecord {
        SegmentRecord {
            file: "doc.txt".to_string(),
            index,
            text: text.to_string(),
            offset: index * 10,
            length: text.chars().count(),
        }
    }

    #[test]
    fn test_format_names() {
        let names: Vec<_> = OutputFormat::ALL.iter().map(OutputFormat::as_str).collect();
        assert_eq!(names, vec!["text", "json", "markdown"]);
    }

    #[test]
    fn test_create_formatter_for_each_format() {
        for format in OutputFormat::ALL {
            let buffer = SharedBuffer::default();
            let mut formatter = create_formatter(format, buffer.clone(), FormatOptions::default());
            formatter.begin_file("doc.txt", 1).unwrap();
            formatter.format_segment(&record(0, "hello")).unwrap();
            formatter.finish().unwrap();
            assert!(buffer.contents().contains("hello"), "{}", format.as_str());
        }
    }

    #[test]
    fn test_format_deserializes_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }
}
