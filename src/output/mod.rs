pub mod breakdown;
pub mod json;
pub mod markdown;
pub mod terminal;

use anyhow::Result;
use clap::ValueEnum;
use std::io::Write;
use std::path::PathBuf;

use crate::formatting::FormattingConfig;
use crate::io;
use crate::roi::{RoiCalculation, RoiCalculator};

pub use breakdown::{snapshot_breakdown, BreakdownRow};
pub use json::JsonWriter;
pub use markdown::MarkdownWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Text report for the console
    Terminal,
    /// Structured export document
    Json,
    /// Report as markdown tables
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            _ => None,
        }
    }
}

/// A finished calculation plus the optional input comparison
#[derive(Debug, Clone)]
pub struct Report {
    pub calculation: RoiCalculation,
    pub breakdown: Option<Vec<BreakdownRow>>,
}

impl Report {
    pub fn new(calculation: RoiCalculation) -> Self {
        Self {
            calculation,
            breakdown: None,
        }
    }

    /// Attach the baseline vs current table for the calculator's inputs
    pub fn with_breakdown(mut self, calculator: &RoiCalculator) -> Self {
        self.breakdown = Some(snapshot_breakdown(
            calculator.baseline(),
            calculator.current(),
        ));
        self
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

/// Render without color, for files and tests
pub fn format_report_to_string(report: &Report, format: OutputFormat) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut buffer), FormattingConfig::plain());
        writer.write_report(report)?;
    }
    Ok(String::from_utf8(buffer)?)
}

/// Send the report to a file, or to stdout when no file is given
pub fn output_report(
    report: &Report,
    format: OutputFormat,
    output_file: Option<PathBuf>,
    formatting: FormattingConfig,
) -> Result<()> {
    match output_file {
        Some(path) => {
            let content = format_report_to_string(report, format)?;
            io::write_file(&path, &content)?;
            log::info!("Wrote {:?} report to {}", format, path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = create_writer(format, Box::new(stdout.lock()), formatting);
            writer.write_report(report)?;
        }
    }
    Ok(())
}
