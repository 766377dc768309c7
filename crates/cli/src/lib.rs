//! surfarea batch tools
//!
//! Shared driver for the `water-area` and `salt-area` binaries: each scans a
//! folder of multi-band GeoTIFFs, measures the target class area per year and
//! shows the trend.

pub mod batch;
pub mod config;
pub mod report;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser};

use surfarea_gui::{show_trend, TrendChart};

pub use batch::{
    discover_rasters, process_file, run_batch, BatchReport, FileOutcome, SkipReason,
};
pub use config::RunConfig;

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Folder containing the .tif / .tiff images
    pub folder: PathBuf,
}

impl Cli {
    /// Parse the command line, naming the command after the calling binary
    pub fn parse_as(name: &'static str, about: &'static str) -> Self {
        let matches = Cli::command().name(name).about(about).get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }
}

/// Entry point shared by both binaries.
pub fn run(cli: Cli, config: RunConfig) -> Result<()> {
    report::setup_logging(cli.verbose);

    let target = config.target;
    let batch = run_batch(&cli.folder, &config)?;

    println!("\n--- All files processed. Generating plot... ---");
    match TrendChart::from_series(target, batch.series) {
        Some(chart) => show_trend(chart)?,
        None => println!("No data to plot."),
    }
    Ok(())
}
