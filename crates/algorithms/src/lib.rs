//! # surfarea Algorithms
//!
//! Surface-class area analysis for surfarea.
//!
//! ## Modules
//!
//! - **imagery**: NDWI and SCI indices, class masks, area aggregation,
//!   per-class detectors
//! - **series**: filename years, area samples and the time series

pub mod imagery;
pub mod series;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        class_area, class_mask, ndwi, sci, ClassDetector, ClassMask, SaltDetector, SciParams,
        TargetClass, Threshold, WaterDetector,
    };
    pub use crate::series::{extract_year, AreaSample, TimeSeries};
    pub use surfarea_core::prelude::*;
}
