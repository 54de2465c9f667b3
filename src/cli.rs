use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "roicalc")]
#[command(about = "Return-on-investment calculator for before/after operating metrics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate ROI for a scenario file (TOML, JSON or YAML)
    Calculate {
        /// Scenario file with client, project, investment and both snapshots
        scenario: PathBuf,

        /// Output format (defaults to the configured format, else terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Calculation date to stamp on the report (YYYY-MM-DD, defaults to today)
        #[arg(long, env = "ROICALC_DATE")]
        date: Option<NaiveDate>,

        /// Append a baseline vs current table of the input metrics
        #[arg(long)]
        breakdown: bool,

        /// Plain output: no colors
        #[arg(long)]
        plain: bool,
    },

    /// Check a scenario file for implausible inputs
    Validate {
        /// Scenario file to check
        scenario: PathBuf,

        /// Fail on warnings as well as errors
        #[arg(long)]
        strict: bool,

        /// Print issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the built-in example scenario
    Example {
        /// Destination file; the extension selects the format (prints TOML when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
