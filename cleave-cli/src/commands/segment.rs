//! Segment command implementation

use crate::config::{CliConfig, LengthUnit};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FormatOptions, OutputFormat, SegmentRecord};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use cleave_core::{CodeLanguage, Splitter, SplitterOptions};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum segment length
    #[arg(short = 'l', long = "length", value_name = "LENGTH")]
    pub segment_length: Option<usize>,

    /// Context shared between consecutive segments
    #[arg(long = "overlap", value_name = "N")]
    pub segment_overlap: Option<usize>,

    /// Keep leading and trailing whitespace in segments
    #[arg(long)]
    pub no_trim: bool,

    /// Normalize whitespace before segmenting
    #[arg(long)]
    pub normalize: bool,

    /// Split every file as this programming language
    #[arg(long, value_name = "NAME")]
    pub language: Option<String>,

    /// Unit used to measure segment length
    #[arg(long, value_enum)]
    pub unit: Option<LengthUnit>,

    /// Segment files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing (0 = auto)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Decode input files from this encoding instead of UTF-8
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Segments produced for one input file
#[derive(Debug)]
struct FileSegments {
    file: String,
    records: Vec<SegmentRecord>,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let options = config.segmentation.splitter_options()?;
        let forced_language = self
            .language
            .as_deref()
            .map(CodeLanguage::from_name)
            .transpose()
            .map_err(CliError::from)?;

        let reader = match &self.encoding {
            Some(label) => FileReader::with_encoding(label)?,
            None => FileReader::new(),
        };
        log::debug!("Reading input as {}", reader.encoding_name());

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to segment", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let process = |path: &PathBuf| -> Result<FileSegments> {
            let result = segment_file(path, &reader, &options, forced_language);
            progress.file_completed(&path.display().to_string());
            result
        };

        let results: Vec<Result<FileSegments>> = if config.performance.parallel && files.len() > 1
        {
            let threads = match config.performance.worker_threads {
                0 => num_cpus::get(),
                n => n,
            };
            log::info!("Segmenting in parallel on {threads} threads");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| files.par_iter().map(process).collect())
        } else {
            files.iter().map(process).collect()
        };
        progress.finish();

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(
            config.output.default_format,
            writer,
            FormatOptions {
                pretty_json: config.output.pretty_json,
                include_metadata: config.output.include_metadata,
            },
        );

        let mut total = 0;
        for result in results {
            let segments = result?;
            formatter.begin_file(&segments.file, segments.records.len())?;
            for record in &segments.records {
                formatter.format_segment(record)?;
            }
            total += segments.records.len();
        }
        formatter.finish()?;

        log::info!("Produced {total} segments");
        Ok(())
    }

    /// Config file values with command-line flags applied on top
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let segmentation = &mut config.segmentation;
        if let Some(length) = self.segment_length {
            segmentation.segment_length = length;
        }
        if let Some(overlap) = self.segment_overlap {
            segmentation.segment_overlap = overlap;
        }
        if self.no_trim {
            segmentation.trim = false;
        }
        if self.normalize {
            segmentation.normalize = true;
        }
        if let Some(unit) = self.unit {
            segmentation.length_unit = unit;
        }
        if let Some(format) = self.format {
            config.output.default_format = format;
        }
        if self.parallel {
            config.performance.parallel = true;
        }
        if let Some(threads) = self.threads {
            config.performance.worker_threads = threads;
        }

        Ok(config)
    }
}

/// Read and segment one file
fn segment_file(
    path: &Path,
    reader: &FileReader,
    options: &SplitterOptions,
    forced_language: Option<CodeLanguage>,
) -> Result<FileSegments> {
    let file = path.display().to_string();
    if let Ok(size) = FileReader::file_size(path) {
        log::info!("Segmenting {file} ({size} bytes)");
    }

    let text = reader.read_text(path)?;
    let language = forced_language.or_else(|| CodeLanguage::from_file_name(&file));
    let splitter = match language {
        Some(language) => {
            log::debug!("{file}: splitting as {}", language.name());
            Splitter::for_language(options.clone(), language)
        }
        None => Splitter::new(options.clone()),
    };

    let prepared = splitter.prepare(&text);
    let len_fn = options.len_fn();
    let records = splitter
        .chunks(&prepared)
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| SegmentRecord {
            file: file.clone(),
            index,
            text: chunk.text.to_string(),
            offset: chunk.start,
            length: len_fn.measure(chunk.text),
        })
        .collect();

    Ok(FileSegments { file, records })
}
