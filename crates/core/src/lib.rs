//! # surfarea Core
//!
//! Core types and I/O for the surfarea surface-area trend tools.
//!
//! This crate provides:
//! - `Raster<T>`: Generic 2D raster grid type
//! - `BandRole` / `BandSet`: the spectral bands of one image, keyed by role
//! - Multi-band GeoTIFF loading into a `BandSet`

pub mod error;
pub mod io;
pub mod raster;

pub use error::{Error, Result};
pub use raster::{BandRole, BandSet, Raster, RasterElement};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::raster::{BandRole, BandSet, Raster, RasterElement};
}
