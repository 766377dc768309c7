//! The batch driver: discover rasters, measure each one, collect the series

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use surfarea_algorithms::imagery::ClassDetector;
use surfarea_algorithms::series::{extract_year, AreaSample, TimeSeries};
use surfarea_core::io::read_bands;
use surfarea_core::Error;

use crate::config::RunConfig;
use crate::report::{format_km2, spinner};

/// Why a file contributed no sample
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    YearNotFound,
    /// Raster could not be opened or decoded, or a band is absent
    LoadFailure(String),
    ShapeMismatch(String),
    ComputeFailure(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::YearNotFound => f.write_str("could not find a year in filename"),
            SkipReason::LoadFailure(e) => write!(f, "cannot load raster: {}", e),
            SkipReason::ShapeMismatch(e) => write!(f, "bands differ in shape: {}", e),
            SkipReason::ComputeFailure(e) => write!(f, "error processing file: {}", e),
        }
    }
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Sample(AreaSample),
    Skipped(SkipReason),
}

/// What a batch run produced
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Samples in file-processing order
    pub series: TimeSeries,
    /// Files that contributed nothing, by file name
    pub skipped: Vec<(String, SkipReason)>,
}

/// Whether `name` has a `.tif` / `.tiff` extension, case-insensitively
pub fn is_raster_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".tif") || lower.ends_with(".tiff")
}

/// Raster files directly inside `dir`, sorted by file name.
///
/// Fails if `dir` is not an existing directory.
pub fn discover_rasters(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Folder '{}' not found", dir.display());
    }

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Cannot list '{}'", dir.display()))? {
        let entry = entry.with_context(|| format!("Cannot list '{}'", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_raster_name(&name) {
            files.push((name, entry.path()));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(files.into_iter().map(|(_, path)| path).collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Measure one raster file.
///
/// The year is taken from the file name first; files without one are not
/// opened. The raster is released before this returns.
pub fn process_file(path: &Path, config: &RunConfig, detector: &dyn ClassDetector) -> FileOutcome {
    let name = file_name(path);

    let Some(year) = extract_year(&name) else {
        return FileOutcome::Skipped(SkipReason::YearNotFound);
    };

    let bands = match read_bands(path, &config.bands) {
        Ok(bands) => bands,
        Err(e) => return FileOutcome::Skipped(SkipReason::LoadFailure(e.to_string())),
    };
    debug!(
        "{}: read bands {:?}",
        name,
        bands.roles().collect::<Vec<_>>()
    );

    match detector.measure(&bands, config.pixel_area) {
        Ok(area) => FileOutcome::Sample(AreaSample::new(year, area)),
        Err(e @ Error::SizeMismatch { .. }) => {
            FileOutcome::Skipped(SkipReason::ShapeMismatch(e.to_string()))
        }
        Err(e) => FileOutcome::Skipped(SkipReason::ComputeFailure(e.to_string())),
    }
}

/// Process every raster in `dir` in file-name order.
///
/// Only configuration problems (invalid config, missing or unreadable
/// directory) return `Err`; per-file failures are logged and skipped.
pub fn run_batch(dir: &Path, config: &RunConfig) -> Result<BatchReport> {
    let detector = config.detector().context("Invalid run configuration")?;
    let label = detector.target().label();

    println!("Scanning for .tif files in folder: '{}'...", dir.display());
    let files = discover_rasters(dir)?;
    info!("{} raster file(s) found", files.len());

    let mut report = BatchReport::default();
    for path in &files {
        let name = file_name(path);
        println!("\nProcessing file: {}...", name);

        let pb = spinner(&format!("Computing {}...", detector.index_name()));
        let outcome = process_file(path, config, detector.as_ref());
        pb.finish_and_clear();

        match outcome {
            FileOutcome::Sample(sample) => {
                println!(
                    "  - Found Year: {}, Calculated {} Area: {} sq km",
                    sample.year,
                    label,
                    format_km2(sample.area_m2)
                );
                report.series.push(sample);
            }
            FileOutcome::Skipped(reason) => {
                warn!("{}: {}", name, reason);
                report.skipped.push((name, reason));
            }
        }
    }

    info!(
        "{} sample(s) collected, {} file(s) skipped",
        report.series.len(),
        report.skipped.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_raster_name() {
        assert!(is_raster_name("scene_2001.tif"));
        assert!(is_raster_name("scene_2001.TIFF"));
        assert!(is_raster_name("scene_2001.Tif"));
        assert!(!is_raster_name("scene_2001.tif.aux.xml"));
        assert!(!is_raster_name("scene_2001.jp2"));
        assert!(!is_raster_name("tif"));
    }

    #[test]
    fn test_missing_directory_is_fatal() {
        let result = discover_rasters(Path::new("/nonexistent/surfarea/input"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("not found"), "{}", err);

        assert!(run_batch(Path::new("/nonexistent/surfarea/input"), &RunConfig::salt()).is_err());
    }

    #[test]
    fn test_yearless_file_not_opened() {
        // The path does not exist; a load attempt would report LoadFailure
        let config = RunConfig::water();
        let detector = config.detector().unwrap();
        let outcome = process_file(
            Path::new("/nonexistent/no_date_here.tif"),
            &config,
            detector.as_ref(),
        );
        assert_eq!(outcome, FileOutcome::Skipped(SkipReason::YearNotFound));
    }

    #[test]
    fn test_unreadable_file_is_load_failure() {
        let config = RunConfig::water();
        let detector = config.detector().unwrap();
        let outcome = process_file(
            Path::new("/nonexistent/scene_2004.tif"),
            &config,
            detector.as_ref(),
        );
        assert!(matches!(
            outcome,
            FileOutcome::Skipped(SkipReason::LoadFailure(_))
        ));
    }
}
