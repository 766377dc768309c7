//! Thresholding an index raster into a class mask

use surfarea_core::raster::Raster;
use surfarea_core::{Error, Result};

/// Boolean raster; `true` marks a cell assigned to the target class
pub type ClassMask = Raster<bool>;

/// How index values are tested for class membership
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// `value > t` (strict)
    Above(f64),
    /// `min <= value <= max` (inclusive on both bounds)
    Within { min: f64, max: f64 },
}

impl Threshold {
    /// Reject non-finite bounds and `min > max`
    pub fn validate(&self) -> Result<()> {
        match *self {
            Threshold::Above(t) => {
                if !t.is_finite() {
                    return Err(Error::InvalidParameter {
                        name: "threshold",
                        value: t.to_string(),
                        reason: "must be finite".into(),
                    });
                }
            }
            Threshold::Within { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err(Error::InvalidParameter {
                        name: "threshold",
                        value: format!("{}..={}", min, max),
                        reason: "bounds must be finite".into(),
                    });
                }
                if min > max {
                    return Err(Error::InvalidParameter {
                        name: "threshold",
                        value: format!("{}..={}", min, max),
                        reason: "min must not exceed max".into(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether `value` belongs to the class
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            Threshold::Above(t) => value > t,
            Threshold::Within { min, max } => min <= value && value <= max,
        }
    }
}

/// Build a class mask from an index raster.
///
/// NaN index cells are evaluated as 0.
///
/// # Example
/// ```ignore
/// let water = class_mask(&ndwi_raster, Threshold::Above(0.2))?;
/// let salt = class_mask(&sci_raster, Threshold::Within { min: 0.04, max: 0.15 })?;
/// ```
pub fn class_mask(index: &Raster<f64>, threshold: Threshold) -> Result<ClassMask> {
    threshold.validate()?;
    Ok(index.map(|v| {
        let v = if v.is_nan() { 0.0 } else { v };
        threshold.contains(v)
    }))
}
