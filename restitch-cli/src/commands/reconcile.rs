//! Reconcile command implementation

use crate::error::CliResult;
use crate::input::{SegmentEncoding, SegmentReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Arguments for the reconcile command
#[derive(Debug, Args)]
pub struct ReconcileArgs {
    /// Input files ("-" for stdin; stdin is the default when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<String>,

    /// How segments are encoded in the input
    #[arg(short, long, value_enum, default_value = "json")]
    pub segments: SegmentFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported segment encodings
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SegmentFormat {
    /// JSON array of strings
    Json,
    /// One segment per line
    Lines,
}

impl From<SegmentFormat> for SegmentEncoding {
    fn from(format: SegmentFormat) -> Self {
        match format {
            SegmentFormat::Json => SegmentEncoding::Json,
            SegmentFormat::Lines => SegmentEncoding::Lines,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One piece per line, tagged with its role
    Text,
    /// JSON array of piece objects
    Json,
    /// Merged document with overlaps emphasized
    Markdown,
}

impl ReconcileArgs {
    /// Execute the reconcile command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        let segments = self.read_segments()?;
        log::info!("read {} segments", segments.len());

        let pieces = restitch_core::reconcile(&segments);
        log::debug!("produced {} pieces", pieces.len());

        let writer = self.open_output()?;
        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for (index, piece) in pieces.iter().enumerate() {
            formatter.format_piece(index, piece)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Collect segments from all input sources in argument order
    fn read_segments(&self) -> CliResult<Vec<String>> {
        let reader = SegmentReader::new(self.segments.into());

        if self.input.is_empty() {
            return reader.read_stdin();
        }

        let mut segments = Vec::new();
        for source in &self.input {
            if source == "-" {
                segments.extend(reader.read_stdin()?);
            } else {
                segments.extend(reader.read_file(Path::new(source))?);
            }
        }
        Ok(segments)
    }

    fn open_output(&self) -> CliResult<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("cannot create output file: {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
