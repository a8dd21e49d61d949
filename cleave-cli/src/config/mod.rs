//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use cleave_core::{LengthFn, SplitterOptions, DEFAULT_CHUNK_SIZE};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Unit used to measure segment length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 bytes
    Bytes,
    /// Whitespace-separated words
    Words,
}

impl LengthUnit {
    /// Measurement function for this unit
    pub fn to_len_fn(self) -> LengthFn {
        match self {
            LengthUnit::Chars => LengthFn::chars(),
            LengthUnit::Bytes => LengthFn::bytes(),
            LengthUnit::Words => LengthFn::words(),
        }
    }
}

/// Segmentation-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Maximum segment size in `length_unit`s
    pub segment_length: usize,

    /// Shared context between consecutive segments
    pub segment_overlap: usize,

    /// Strip leading and trailing whitespace from segments
    pub trim: bool,

    /// Normalize whitespace before segmenting
    pub normalize: bool,

    /// How segment length is measured
    pub length_unit: LengthUnit,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            segment_length: DEFAULT_CHUNK_SIZE,
            segment_overlap: 0,
            trim: true,
            normalize: false,
            length_unit: LengthUnit::Chars,
        }
    }
}

impl SegmentationConfig {
    /// Build validated splitter options
    pub fn splitter_options(&self) -> Result<SplitterOptions> {
        SplitterOptions::builder()
            .chunk_size(self.segment_length)
            .chunk_overlap(self.segment_overlap)
            .trim(self.trim)
            .normalize(self.normalize)
            .len_fn(self.length_unit.to_len_fn())
            .build()
            .map_err(|e| CliError::from(e).into())
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Include offsets and lengths in text and Markdown output
    pub include_metadata: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
            include_metadata: false,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Segment documents in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.message().to_string()))?;
        Ok(config)
    }

    /// Check values that the TOML schema cannot express
    pub fn validate(&self) -> Result<()> {
        self.segmentation.splitter_options()?;
        Ok(())
    }

    /// Commented configuration with every default spelled out
    pub fn default_template() -> String {
        let defaults = CliConfig::default();
        format!(
            r#"# cleave configuration

[segmentation]
# Maximum segment size, measured in `length_unit`s
segment_length = {length}
# Context shared between consecutive segments; must be smaller than segment_length
segment_overlap = {overlap}
# Strip leading and trailing whitespace from each segment
trim = {trim}
# Collapse whitespace runs and blank-line runs before segmenting
normalize = {normalize}
# "chars", "bytes" or "words"
length_unit = "chars"

[output]
# "text", "json" or "markdown"
default_format = "text"
pretty_json = {pretty}
# Show offsets and lengths in text and markdown output
include_metadata = {metadata}

[performance]
# Segment documents on a thread pool
parallel = {parallel}
# 0 uses one thread per CPU
worker_threads = {threads}
"#,
            length = defaults.segmentation.segment_length,
            overlap = defaults.segmentation.segment_overlap,
            trim = defaults.segmentation.trim,
            normalize = defaults.segmentation.normalize,
            pretty = defaults.output.pretty_json,
            metadata = defaults.output.include_metadata,
            parallel = defaults.performance.parallel,
            threads = defaults.performance.worker_threads,
        )
    }
}
