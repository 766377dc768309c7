//! Imagery analysis algorithms
//!
//! - Spectral indices: NDWI (water), SCI (salt crust)
//! - Class masks: strict lower threshold or inclusive value band
//! - Area: masked cell count times pixel area
//! - Detectors: index + threshold per target class

mod area;
mod detector;
mod indices;
mod mask;

pub use area::{class_area, pixel_count};
pub use detector::{ClassDetector, SaltDetector, TargetClass, WaterDetector};
pub use indices::{ndwi, sci, SciParams};
pub use mask::{class_mask, ClassMask, Threshold};
