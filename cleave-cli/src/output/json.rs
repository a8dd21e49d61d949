//! JSON output formatter

use super::{OutputFormatter, SegmentRecord};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs segments as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    segments: Vec<SegmentRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            segments: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_segment(&mut self, segment: &SegmentRecord) -> Result<()> {
        self.segments.push(segment.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.segments)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.segments)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
