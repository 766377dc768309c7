//! Surface class detectors
//!
//! A [`ClassDetector`] bundles the bands an index needs, the index formula
//! and the threshold policy for one target class. The batch driver holds a
//! single detector for the whole run and never branches on the class itself.

use std::fmt;

use surfarea_core::raster::{BandRole, BandSet, Raster};
use surfarea_core::Result;

use crate::imagery::area::class_area;
use crate::imagery::indices::{ndwi, sci, SciParams};
use crate::imagery::mask::{class_mask, ClassMask, Threshold};

/// Surface class whose area is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetClass {
    Water,
    Salt,
}

impl TargetClass {
    /// Capitalised label used in titles and console output
    pub fn label(&self) -> &'static str {
        match self {
            TargetClass::Water => "Water",
            TargetClass::Salt => "Salt",
        }
    }
}

impl fmt::Display for TargetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Index strategy for one target class.
pub trait ClassDetector {
    /// Class this detector measures
    fn target(&self) -> TargetClass;

    /// Short index name for log lines ("NDWI", "SCI")
    fn index_name(&self) -> &'static str;

    /// Band roles `compute_index` reads
    fn required_bands(&self) -> &'static [BandRole];

    /// Derive the per-pixel index. All required bands must share one shape.
    fn compute_index(&self, bands: &BandSet) -> Result<Raster<f64>>;

    /// Threshold an index raster into a class mask
    fn make_mask(&self, index: &Raster<f64>) -> Result<ClassMask>;

    /// Class area in square meters for one band set
    fn measure(&self, bands: &BandSet, pixel_area: f64) -> Result<f64> {
        let index = self.compute_index(bands)?;
        let mask = self.make_mask(&index)?;
        Ok(class_area(&mask, pixel_area))
    }
}

/// Surface water from NDWI with a strict lower threshold
#[derive(Debug, Clone)]
pub struct WaterDetector {
    /// Cells with `NDWI > threshold` are water (default: 0.2)
    pub threshold: f64,
}

impl Default for WaterDetector {
    fn default() -> Self {
        Self { threshold: 0.2 }
    }
}

impl ClassDetector for WaterDetector {
    fn target(&self) -> TargetClass {
        TargetClass::Water
    }

    fn index_name(&self) -> &'static str {
        "NDWI"
    }

    fn required_bands(&self) -> &'static [BandRole] {
        &[BandRole::Green, BandRole::Nir]
    }

    fn compute_index(&self, bands: &BandSet) -> Result<Raster<f64>> {
        bands.ensure_same_shape(self.required_bands())?;
        ndwi(bands.get(BandRole::Green)?, bands.get(BandRole::Nir)?)
    }

    fn make_mask(&self, index: &Raster<f64>) -> Result<ClassMask> {
        class_mask(index, Threshold::Above(self.threshold))
    }
}

/// Salt crust from SCI within an inclusive band of values
#[derive(Debug, Clone)]
pub struct SaltDetector {
    /// Inclusive lower bound (default: 0.04)
    pub min: f64,
    /// Inclusive upper bound (default: 0.15)
    pub max: f64,
    pub params: SciParams,
}

impl Default for SaltDetector {
    fn default() -> Self {
        Self {
            min: 0.04,
            max: 0.15,
            params: SciParams::default(),
        }
    }
}

impl ClassDetector for SaltDetector {
    fn target(&self) -> TargetClass {
        TargetClass::Salt
    }

    fn index_name(&self) -> &'static str {
        "SCI"
    }

    fn required_bands(&self) -> &'static [BandRole] {
        &[BandRole::Red, BandRole::Green, BandRole::Nir, BandRole::Swir]
    }

    fn compute_index(&self, bands: &BandSet) -> Result<Raster<f64>> {
        bands.ensure_same_shape(self.required_bands())?;
        sci(
            bands.get(BandRole::Red)?,
            bands.get(BandRole::Green)?,
            bands.get(BandRole::Nir)?,
            bands.get(BandRole::Swir)?,
            &self.params,
        )
    }

    fn make_mask(&self, index: &Raster<f64>) -> Result<ClassMask> {
        class_mask(
            index,
            Threshold::Within {
                min: self.min,
                max: self.max,
            },
        )
    }
}
