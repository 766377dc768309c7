//! Run configuration for one batch

use anyhow::{bail, Result};
use surfarea_algorithms::imagery::{
    ClassDetector, SaltDetector, SciParams, TargetClass, Threshold, WaterDetector,
};
use surfarea_core::BandRole;

/// Ground area of one 30 m Landsat cell, in square meters
pub const LANDSAT_PIXEL_AREA: f64 = 900.0;

/// Everything a batch run needs, fixed at start.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: TargetClass,
    /// Band role to 1-based band number in each file
    pub bands: Vec<(BandRole, usize)>,
    pub threshold: Threshold,
    /// Square meters per pixel, constant for the whole run
    pub pixel_area: f64,
    /// Salt index coefficients; ignored for water
    pub sci: SciParams,
}

impl RunConfig {
    /// Surface water: NDWI from green (band 2) and NIR (band 4), `NDWI > 0.2`
    pub fn water() -> Self {
        Self {
            target: TargetClass::Water,
            bands: vec![(BandRole::Green, 2), (BandRole::Nir, 4)],
            threshold: Threshold::Above(0.2),
            pixel_area: LANDSAT_PIXEL_AREA,
            sci: SciParams::default(),
        }
    }

    /// Salt crust: SCI from green (1), red (3), NIR (4) and SWIR (6), `0.04 <= SCI <= 0.15`
    pub fn salt() -> Self {
        Self {
            target: TargetClass::Salt,
            bands: vec![
                (BandRole::Green, 1),
                (BandRole::Red, 3),
                (BandRole::Nir, 4),
                (BandRole::Swir, 6),
            ],
            threshold: Threshold::Within {
                min: 0.04,
                max: 0.15,
            },
            pixel_area: LANDSAT_PIXEL_AREA,
            sci: SciParams::default(),
        }
    }

    /// Check the configuration and build the run's detector.
    pub fn detector(&self) -> Result<Box<dyn ClassDetector>> {
        if !(self.pixel_area.is_finite() && self.pixel_area > 0.0) {
            bail!("pixel area must be a positive number, got {}", self.pixel_area);
        }
        if let Some((role, _)) = self.bands.iter().find(|(_, band)| *band == 0) {
            bail!("band numbers start at 1 (got 0 for {})", role);
        }
        self.threshold.validate()?;

        let detector: Box<dyn ClassDetector> = match (self.target, self.threshold) {
            (TargetClass::Water, Threshold::Above(threshold)) => {
                Box::new(WaterDetector { threshold })
            }
            (TargetClass::Salt, Threshold::Within { min, max }) => Box::new(SaltDetector {
                min,
                max,
                params: self.sci.clone(),
            }),
            (target, threshold) => {
                bail!("threshold {:?} does not apply to {} detection", threshold, target)
            }
        };

        for role in detector.required_bands() {
            if !self.bands.iter().any(|(r, _)| r == role) {
                bail!(
                    "{} index needs a {} band but none is configured",
                    detector.index_name(),
                    role
                );
            }
        }

        Ok(detector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_build() {
        let water = RunConfig::water().detector().unwrap();
        assert_eq!(water.target(), TargetClass::Water);
        assert_eq!(water.index_name(), "NDWI");

        let salt = RunConfig::salt().detector().unwrap();
        assert_eq!(salt.target(), TargetClass::Salt);
        assert_eq!(salt.index_name(), "SCI");
    }

    #[test]
    fn test_rejects_bad_pixel_area() {
        for area in [0.0, -900.0, f64::NAN, f64::INFINITY] {
            let config = RunConfig {
                pixel_area: area,
                ..RunConfig::water()
            };
            assert!(config.detector().is_err(), "accepted pixel area {}", area);
        }
    }

    #[test]
    fn test_rejects_mismatched_policy() {
        let config = RunConfig {
            threshold: Threshold::Above(0.1),
            ..RunConfig::salt()
        };
        assert!(config.detector().is_err());
    }

    #[test]
    fn test_rejects_missing_role() {
        let config = RunConfig {
            bands: vec![(BandRole::Green, 2)],
            ..RunConfig::water()
        };
        let err = config.detector().err().unwrap();
        assert!(err.to_string().contains("nir"), "{}", err);
    }

    #[test]
    fn test_rejects_band_zero() {
        let config = RunConfig {
            bands: vec![(BandRole::Green, 0), (BandRole::Nir, 4)],
            ..RunConfig::water()
        };
        assert!(config.detector().is_err());
    }
}
