//! Per-year area samples and the run's time series

/// Square meters in one square kilometer
pub const SQ_METERS_PER_SQ_KM: f64 = 1_000_000.0;

/// Class area measured for one raster file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSample {
    pub year: i32,
    /// Area in square meters
    pub area_m2: f64,
}

impl AreaSample {
    pub fn new(year: i32, area_m2: f64) -> Self {
        Self { year, area_m2 }
    }

    /// Area in square kilometers
    pub fn area_km2(&self) -> f64 {
        self.area_m2 / SQ_METERS_PER_SQ_KM
    }
}

/// Append-only sequence of samples in file-processing order.
///
/// Duplicate years are kept as separate samples. Ordering by year happens
/// only when the series is consumed with [`TimeSeries::into_sorted`].
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    samples: Vec<AreaSample>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: AreaSample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in insertion order
    pub fn samples(&self) -> &[AreaSample] {
        &self.samples
    }

    /// Consume the series, returning samples sorted by `(year, area)` ascending.
    ///
    /// Samples sharing a year are ordered by area; exact ties keep insertion
    /// order.
    pub fn into_sorted(self) -> Vec<AreaSample> {
        let mut samples = self.samples;
        sort_samples(&mut samples);
        samples
    }
}

impl FromIterator<AreaSample> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = AreaSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

/// Stable sort by year, then area
pub fn sort_samples(samples: &mut [AreaSample]) {
    samples.sort_by(|a, b| {
        a.year
            .cmp(&b.year)
            .then_with(|| a.area_m2.total_cmp(&b.area_m2))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(samples: &[AreaSample]) -> Vec<(i32, f64)> {
        samples.iter().map(|s| (s.year, s.area_m2)).collect()
    }

    #[test]
    fn test_sort_by_year() {
        let series: TimeSeries = [(2005, 10.0), (2001, 5.0), (2003, 7.0)]
            .into_iter()
            .map(|(y, a)| AreaSample::new(y, a))
            .collect();

        let sorted = series.into_sorted();
        assert_eq!(pairs(&sorted), vec![(2001, 5.0), (2003, 7.0), (2005, 10.0)]);
    }

    #[test]
    fn test_duplicate_years_kept_and_ordered_by_area() {
        let mut series = TimeSeries::new();
        series.push(AreaSample::new(2010, 9.0));
        series.push(AreaSample::new(2004, 1.0));
        series.push(AreaSample::new(2010, 3.0));

        assert_eq!(series.len(), 3);
        assert_eq!(pairs(series.samples()), vec![(2010, 9.0), (2004, 1.0), (2010, 3.0)]);

        let sorted = series.into_sorted();
        assert_eq!(pairs(&sorted), vec![(2004, 1.0), (2010, 3.0), (2010, 9.0)]);
    }

    #[test]
    fn test_area_km2() {
        let sample = AreaSample::new(2000, 33_300.0);
        assert!((sample.area_km2() - 0.0333).abs() < 1e-12);
    }

    #[test]
    fn test_empty_series() {
        let series = TimeSeries::new();
        assert!(series.is_empty());
        assert!(series.into_sorted().is_empty());
    }
}
