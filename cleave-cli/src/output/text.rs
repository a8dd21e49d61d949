//! Plain text output formatter

use super::{OutputFormatter, SegmentRecord};
use anyhow::Result;
use std::io::Write;

/// Line printed between consecutive segments
pub const SEGMENT_RULE: &str = "----------------------------------------";

/// Plain text formatter - segments separated by a rule line
pub struct TextFormatter<W: Write> {
    writer: W,
    include_metadata: bool,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, include_metadata: bool) -> Self {
        Self {
            writer,
            include_metadata,
            written: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_segment(&mut self, segment: &SegmentRecord) -> Result<()> {
        if self.written > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "{SEGMENT_RULE}")?;
            writeln!(self.writer)?;
        }
        if self.include_metadata {
            writeln!(
                self.writer,
                "[{} #{} offset={} length={}]",
                segment.file, segment.index, segment.offset, segment.length
            )?;
        }
        writeln!(self.writer, "{}", segment.text)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
