//! Acquisition year from a raster filename
//!
//! Scans for the first `19xx` or `20xx` digit run, anywhere in the name:
//! - `LT05_L2SP_160029_20030712.tif` → 2003
//! - `salinity_2003_band4.tif` → 2003
//!
//! No date validation is done; `scene_19051.tif` yields 1905.

use regex::Regex;
use std::sync::OnceLock;

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also match non-ASCII digits
    PATTERN.get_or_init(|| Regex::new(r"(?:19|20)[0-9]{2}").expect("year pattern is valid"))
}

/// First year between 1900 and 2099 found in `filename`, scanning left to right.
pub fn extract_year(filename: &str) -> Option<i32> {
    year_pattern()
        .find(filename)
        .and_then(|m| m.as_str().parse().ok())
}
