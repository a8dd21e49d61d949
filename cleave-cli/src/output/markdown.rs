//! Markdown output formatter

use super::{OutputFormatter, SegmentRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section per file, numbered segments
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    segment_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
            segment_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_file(&mut self, file: &str, segment_count: usize) -> Result<()> {
        writeln!(self.writer, "## {file}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "*{segment_count} segments*")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_segment(&mut self, segment: &SegmentRecord) -> Result<()> {
        self.segment_count += 1;
        writeln!(self.writer, "### Segment {}", segment.index + 1)?;
        writeln!(self.writer)?;
        if self.include_metadata {
            writeln!(
                self.writer,
                "*offset {}, length {}*",
                segment.offset, segment.length
            )?;
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "{}", segment.text)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total segments: {}*", self.segment_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;

    #[test]
    fn test_sections_and_total() {
        let buffer = SharedBuffer::default();
        let mut formatter = MarkdownFormatter::new(buffer.clone(), false);
        formatter.begin_file("notes.md", 2).unwrap();
        for (index, text) in ["one", "two"].into_iter().enumerate() {
            formatter
                .format_segment(&SegmentRecord {
                    file: "notes.md".to_string(),
                    index,
                    text: text.to_string(),
                    offset: 0,
                    length: 3,
                })
                .unwrap();
        }
        formatter.finish().unwrap();

        let out = buffer.contents();
        assert!(out.starts_with("## notes.md\n"));
        assert!(out.contains("### Segment 1\n\none\n"));
        assert!(out.contains("### Segment 2\n\ntwo\n"));
        assert!(out.ends_with("---\n*Total segments: 2*\n"));
    }
}
