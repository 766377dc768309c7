//! Building the area-over-time series
//!
//! - `extract_year`: acquisition year from a filename
//! - `AreaSample` / `TimeSeries`: accumulated (year, area) results

mod sample;
mod year;

pub use sample::{sort_samples, AreaSample, TimeSeries, SQ_METERS_PER_SQ_KM};
pub use year::extract_year;
