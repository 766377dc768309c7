//! Chart-ready view of a time series

use surfarea_algorithms::imagery::TargetClass;
use surfarea_algorithms::series::TimeSeries;

/// Everything the trend window draws, already sorted and in km².
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub target: TargetClass,
    /// `[year, area_km2]`, ascending by year
    pub points: Vec<[f64; 2]>,
    /// Distinct years, ascending; one x-axis tick each
    pub years: Vec<i32>,
    pub title: String,
    pub series_label: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl TrendChart {
    /// Prepare a chart, or `None` when there is nothing to plot.
    pub fn from_series(target: TargetClass, series: TimeSeries) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let samples = series.into_sorted();
        let points = samples
            .iter()
            .map(|s| [f64::from(s.year), s.area_km2()])
            .collect();

        let mut years: Vec<i32> = samples.iter().map(|s| s.year).collect();
        years.dedup();

        Some(Self {
            target,
            points,
            years,
            title: format!("{} Surface Area Over Time", target.label()),
            series_label: format!("{} Area", target.label()),
            x_label: "Year",
            y_label: "Area (Square Kilometers)",
        })
    }
}
