//! Pluggable size measurement
//!
//! All size comparisons in the chunk builder go through a [`LengthFn`].
//! Sizes are abstract units chosen by the caller and are unrelated to the
//! byte offsets used for slicing.

use std::fmt;
use std::sync::Arc;

/// Maps a piece of text to its size in caller-defined units
///
/// The function must be monotone under extension: appending text never
/// makes the measured size smaller. The builder's binary searches rely on it.
#[derive(Clone)]
pub struct LengthFn {
    name: &'static str,
    measure: Arc<dyn Fn(&str) -> usize + Send + Sync>,
}

impl LengthFn {
    /// Wrap an arbitrary measurement function
    pub fn new<F>(measure: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        Self {
            name: "custom",
            measure: Arc::new(measure),
        }
    }

    /// Count Unicode scalar values (the default)
    pub fn chars() -> Self {
        Self {
            name: "chars",
            measure: Arc::new(|text: &str| text.chars().count()),
        }
    }

    /// Count UTF-8 bytes
    pub fn bytes() -> Self {
        Self {
            name: "bytes",
            measure: Arc::new(str::len),
        }
    }

    /// Count whitespace-separated words
    pub fn words() -> Self {
        Self {
            name: "words",
            measure: Arc::new(|text: &str| text.split_whitespace().count()),
        }
    }

    /// Measure `text`
    #[inline]
    pub fn measure(&self, text: &str) -> usize {
        (self.measure)(text)
    }

    /// Short name used in logs and debug output
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LengthFn {
    fn default() -> Self {
        Self::chars()
    }
}

impl fmt::Debug for LengthFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LengthFn").field(&self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_counts_scalar_values() {
        let len = LengthFn::chars();
        assert_eq!(len.measure(""), 0);
        assert_eq!(len.measure("abc"), 3);
        assert_eq!(len.measure("日本語"), 3);
        // Family emoji is one grapheme but five scalar values
        assert_eq!(len.measure("👨‍👩‍👧"), 5);
    }

    #[test]
    fn test_bytes_counts_utf8_bytes() {
        let len = LengthFn::bytes();
        assert_eq!(len.measure("abc"), 3);
        assert_eq!(len.measure("日本語"), 9);
    }

    #[test]
    fn test_words_counts_whitespace_separated_runs() {
        let len = LengthFn::words();
        assert_eq!(len.measure(""), 0);
        assert_eq!(len.measure("  one two\n\nthree  "), 3);
    }

    #[test]
    fn test_custom_function() {
        let len = LengthFn::new(|text| text.len() * 2);
        assert_eq!(len.measure("ab"), 4);
        assert_eq!(len.name(), "custom");
    }

    #[test]
    fn test_default_is_chars() {
        assert_eq!(LengthFn::default().name(), "chars");
        assert_eq!(format!("{:?}", LengthFn::default()), "LengthFn(\"chars\")");
    }
}
