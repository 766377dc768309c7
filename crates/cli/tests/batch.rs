//! End-to-end batch runs over generated GeoTIFF folders.
//!
//! Each fixture file is a page stack: one 32-bit float band per TIFF page,
//! numbered from 1, matching the band numbers in `RunConfig`.

use std::fs::{self, File};
use std::path::Path;

use surfarea_algorithms::series::AreaSample;
use surfarea_cli::{discover_rasters, run_batch, RunConfig, SkipReason};
use tiff::encoder::colortype::Gray32Float;
use tiff::encoder::TiffEncoder;

/// Write `pages` (cols, rows, data) as a multi-page TIFF
fn write_stack(path: &Path, pages: &[(u32, u32, Vec<f32>)]) {
    let file = File::create(path).unwrap();
    let mut encoder = TiffEncoder::new(file).unwrap();
    for (cols, rows, data) in pages {
        encoder.write_image::<Gray32Float>(*cols, *rows, data).unwrap();
    }
}

/// 4-band 4x4 scene whose first `water_cells` cells are water (band 2 green, band 4 nir)
fn water_scene(water_cells: usize) -> Vec<(u32, u32, Vec<f32>)> {
    let cells = 16;
    let green: Vec<f32> = (0..cells).map(|i| if i < water_cells { 0.4 } else { 0.1 }).collect();
    let nir: Vec<f32> = (0..cells).map(|i| if i < water_cells { 0.1 } else { 0.4 }).collect();
    vec![
        (4, 4, vec![0.0; cells]),
        (4, 4, green),
        (4, 4, vec![0.0; cells]),
        (4, 4, nir),
    ]
}

fn pairs(report: &surfarea_cli::BatchReport) -> Vec<(i32, f64)> {
    report
        .series
        .samples()
        .iter()
        .map(|s: &AreaSample| (s.year, s.area_m2))
        .collect()
}

#[test]
fn water_batch_skips_bad_files_and_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_stack(&root.join("a_lake_2005.tif"), &water_scene(5));
    write_stack(&root.join("b_lake_2001.TIF"), &water_scene(3));

    // Band 4 is narrower than band 2
    let mut mismatched = water_scene(4);
    mismatched[3] = (3, 4, vec![0.1; 12]);
    write_stack(&root.join("c_lake_2003.tif"), &mismatched);

    fs::write(root.join("d_corrupt_2007.tiff"), b"not a tiff at all").unwrap();
    write_stack(&root.join("e_undated.tif"), &water_scene(16));
    write_stack(&root.join("f_lake_2009.tif"), &water_scene(16)[..2]);
    // A good scene after all the failures is still recorded
    write_stack(&root.join("g_lake_2011.tif"), &water_scene(7));
    fs::write(root.join("notes_2004.txt"), b"ignored").unwrap();

    let report = run_batch(root, &RunConfig::water()).unwrap();

    assert_eq!(
        pairs(&report),
        vec![(2005, 5.0 * 900.0), (2001, 3.0 * 900.0), (2011, 7.0 * 900.0)]
    );

    let skipped: Vec<&str> = report.skipped.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        skipped,
        vec!["c_lake_2003.tif", "d_corrupt_2007.tiff", "e_undated.tif", "f_lake_2009.tif"]
    );
    assert!(matches!(report.skipped[0].1, SkipReason::ShapeMismatch(_)));
    assert!(matches!(report.skipped[1].1, SkipReason::LoadFailure(_)));
    assert_eq!(report.skipped[2].1, SkipReason::YearNotFound);
    // Only two pages: band 4 does not exist
    assert!(matches!(report.skipped[3].1, SkipReason::LoadFailure(_)));
}

#[test]
fn salt_batch_measures_inclusive_band() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    // Bands: 1 green, 3 red, 4 nir, 6 swir.
    // raw = (0.4 - 0.2) - 0.3 * ((0.3 - 0.1) - (0.4 - 0.1)) = 0.23, SCI = 0.046
    let cells = 9;
    let salt_cells = 6;
    let red: Vec<f32> = (0..cells).map(|i| if i < salt_cells { 0.4 } else { 0.1 }).collect();
    let pages = vec![
        (3, 3, vec![0.2; cells]),
        (3, 3, vec![0.0; cells]),
        (3, 3, red),
        (3, 3, vec![0.3; cells]),
        (3, 3, vec![0.0; cells]),
        (3, 3, vec![0.1; cells]),
    ];
    write_stack(&root.join("pan_1998.tif"), &pages);

    let report = run_batch(root, &RunConfig::salt()).unwrap();
    assert_eq!(pairs(&report), vec![(1998, 6.0 * 900.0)]);
    assert!(report.skipped.is_empty());
}

#[test]
fn empty_folder_gives_empty_series() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), b"nothing here").unwrap();

    let report = run_batch(dir.path(), &RunConfig::water()).unwrap();
    assert!(report.series.is_empty());
    assert!(report.skipped.is_empty());
}

#[test]
fn discovery_is_sorted_and_non_recursive() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    for name in ["c_2003.tif", "A_2010.tiff", "b_2001.tif"] {
        fs::write(root.join(name), b"").unwrap();
    }
    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("d_2004.tif"), b"").unwrap();

    let names: Vec<String> = discover_rasters(root)
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["A_2010.tiff", "b_2001.tif", "c_2003.tif"]);
}

#[test]
fn missing_folder_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    assert!(run_batch(&missing, &RunConfig::water()).is_err());
    assert!(run_batch(&missing, &RunConfig::salt()).is_err());
}
