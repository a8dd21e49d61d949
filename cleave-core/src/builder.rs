//! Greedy multi-level chunk packing
//!
//! The builder walks the document with a cursor. At each step it looks for
//! the strongest boundary level that still offers a fitting end, takes the
//! largest such end, and falls back to whole characters when no boundary
//! fits. All size checks go through the configured [`LengthFn`]; offsets are
//! bytes and are only ever used for slicing.
//!
//! [`LengthFn`]: crate::LengthFn

use crate::boundary::{Boundary, Level};
use crate::options::SplitterOptions;
use log::trace;
use smallvec::SmallVec;

/// An emitted chunk and where it sits in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunk<'a> {
    /// Chunk text, trimmed when trimming is enabled
    pub text: &'a str,
    /// Byte offset of `text` within the document
    pub start: usize,
}

impl TextChunk<'_> {
    /// Byte offset one past the end of the chunk
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Number of leading indices in `0..len` for which `pred` holds
///
/// `pred` must be true on a prefix of the range and false afterwards. Probes
/// grow exponentially before a binary search narrows the last gap, so the
/// cost depends on the answer rather than on `len`.
pub(crate) fn gallop(len: usize, mut pred: impl FnMut(usize) -> bool) -> usize {
    let mut lo = 0;
    let mut step = 1;
    let mut hi = loop {
        let probe = lo + step - 1;
        if probe >= len {
            break len;
        }
        if pred(probe) {
            lo = probe + 1;
            step *= 2;
        } else {
            break probe;
        }
    };

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Packs one document into chunks
pub(crate) struct ChunkBuilder<'a, 'b> {
    text: &'a str,
    boundaries: &'b [Boundary],
    options: &'b SplitterOptions,
}

impl<'a, 'b> ChunkBuilder<'a, 'b> {
    pub(crate) fn new(
        text: &'a str,
        boundaries: &'b [Boundary],
        options: &'b SplitterOptions,
    ) -> Self {
        debug_assert!(crate::boundary::is_sorted(boundaries));
        Self {
            text,
            boundaries,
            options,
        }
    }

    fn fits(&self, start: usize, end: usize) -> bool {
        self.options.fits(&self.text[start..end])
    }

    pub(crate) fn build(self) -> Vec<TextChunk<'a>> {
        let text = self.text;
        let mut chunks = Vec::new();
        let mut cursor = 0;
        // End of the previous chunk; every new chunk must end past it
        let mut floor = 0;

        while cursor < text.len() {
            let Some((end, level)) = self.next_end(cursor, floor) else {
                trace!("no end past {floor} fits from overlap start {cursor}; dropping overlap");
                cursor = floor;
                continue;
            };

            match level {
                Some(level) => trace!("chunk {cursor}..{end} at {level}"),
                None => trace!("chunk {cursor}..{end} at character level"),
            }
            self.emit(&mut chunks, cursor, end);
            floor = end;

            if end >= text.len() {
                break;
            }

            let mut next = if self.options.chunk_overlap() > 0 {
                self.overlap_start(cursor, end)
            } else {
                end
            };
            if next <= cursor {
                next = cursor + next_char_len(text, cursor);
                trace!("cursor stalled at {cursor}; forcing advance to {next}");
            }
            cursor = next;
        }

        chunks
    }

    fn emit(&self, chunks: &mut Vec<TextChunk<'a>>, start: usize, end: usize) {
        let slice = &self.text[start..end];
        if !self.options.trim() {
            chunks.push(TextChunk { text: slice, start });
            return;
        }

        let trimmed = slice.trim();
        if !trimmed.is_empty() {
            let offset = slice.len() - slice.trim_start().len();
            chunks.push(TextChunk {
                text: trimmed,
                start: start + offset,
            });
        }
    }

    /// Pick the end of the chunk starting at `cursor`
    ///
    /// Returns `None` only when `cursor` lies before `floor` (inside an
    /// overlap) and nothing past `floor` fits.
    fn next_end(&self, cursor: usize, floor: usize) -> Option<(usize, Option<Level>)> {
        let first = self.boundaries.partition_point(|b| b.start < cursor);
        let candidates = &self.boundaries[first..];
        let horizon = gallop(candidates.len(), |i| self.fits(cursor, candidates[i].start));
        let window = &candidates[..horizon];

        let mut levels: SmallVec<[Level; 16]> = window.iter().map(|b| b.level).collect();
        levels.sort_unstable_by(|a, b| b.cmp(a));
        levels.dedup();

        let mut ends: Vec<usize> = Vec::with_capacity(window.len() + 1);
        for level in levels {
            ends.clear();
            ends.extend(
                window
                    .iter()
                    .filter(|b| b.level >= level && b.end > floor)
                    .map(|b| b.end),
            );
            ends.push(self.text.len());
            ends.sort_unstable();
            ends.dedup();

            let fitting = ends.partition_point(|&end| self.fits(cursor, end));
            if fitting > 0 {
                return Some((ends[fitting - 1], Some(level)));
            }
        }

        if self.fits(cursor, self.text.len()) {
            return Some((self.text.len(), None));
        }

        self.char_end(cursor, floor).map(|end| (end, None))
    }

    /// Longest run of whole characters past `floor` that fits
    fn char_end(&self, cursor: usize, floor: usize) -> Option<usize> {
        let mut char_ends = self.text[floor..]
            .char_indices()
            .map(|(i, c)| floor + i + c.len_utf8());
        let mut seen: Vec<usize> = Vec::new();

        let fitting = gallop(usize::MAX, |i| {
            while seen.len() <= i {
                match char_ends.next() {
                    Some(end) => seen.push(end),
                    None => return false,
                }
            }
            self.fits(cursor, seen[i])
        });

        if fitting > 0 {
            return Some(seen[fitting - 1]);
        }
        if floor == cursor {
            // A single character larger than the chunk size goes out alone
            return Some(cursor + next_char_len(self.text, cursor));
        }
        None
    }

    /// Whether the chunk starting at `start` can end on a boundary past `floor`
    fn ends_on_boundary(&self, start: usize, floor: usize) -> bool {
        match self.next_end(start, floor) {
            Some((end, level)) => level.is_some() || end == self.text.len(),
            None => false,
        }
    }

    /// Where the chunk after `cursor..end` starts
    ///
    /// Takes the earliest boundary edge inside the chunk whose suffix fits in
    /// the overlap window and from which the next chunk still ends on a
    /// boundary. When every such edge would force a character-level break
    /// but starting at `end` would not, the overlap is dropped. Without any
    /// fitting edge the earliest fitting character offset is used. Returns
    /// `end` when no overlap is possible.
    fn overlap_start(&self, cursor: usize, end: usize) -> usize {
        let lo = self.boundaries.partition_point(|b| b.start <= cursor);
        let hi = self.boundaries.partition_point(|b| b.start < end);

        // Both edges qualify: a separator's end is where the text after it begins
        let mut starts: SmallVec<[usize; 32]> = self.boundaries[lo..hi]
            .iter()
            .filter(|b| b.end <= end)
            .flat_map(|b| [b.start, b.end])
            .filter(|&edge| edge > cursor && edge < end)
            .collect();
        starts.sort_unstable();
        starts.dedup();

        let fits_overlap = |start: usize| self.options.fits_overlap(&self.text[start..end]);

        let first_fitting = starts.partition_point(|&start| !fits_overlap(start));
        let fitting = &starts[first_fitting..];
        let start = match fitting.first() {
            Some(&widest) => fitting
                .iter()
                .copied()
                .find(|&start| self.ends_on_boundary(start, end))
                .unwrap_or_else(|| {
                    if self.ends_on_boundary(end, end) {
                        trace!("overlap from {widest} would split a word; dropping it");
                        end
                    } else {
                        widest
                    }
                }),
            None => self.char_overlap_start(cursor, end),
        };

        if start <= cursor || start >= end {
            end
        } else {
            trace!("overlap {start}..{end}");
            start
        }
    }

    fn char_overlap_start(&self, cursor: usize, end: usize) -> usize {
        let mut char_starts = self.text[cursor..end]
            .char_indices()
            .rev()
            .map(|(i, _)| cursor + i)
            .filter(|&start| start > cursor);
        let mut seen: Vec<usize> = Vec::new();

        let fitting = gallop(usize::MAX, |i| {
            while seen.len() <= i {
                match char_starts.next() {
                    Some(start) => seen.push(start),
                    None => return false,
                }
            }
            self.options.fits_overlap(&self.text[seen[i]..end])
        });

        if fitting > 0 {
            seen[fitting - 1]
        } else {
            end
        }
    }
}

fn next_char_len(text: &str, at: usize) -> usize {
    text[at..].chars().next().map_or(1, char::len_utf8)
}
