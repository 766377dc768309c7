//! Raster data structures and operations

mod bands;
mod element;
mod grid;

pub use bands::{BandRole, BandSet};
pub use element::RasterElement;
pub use grid::Raster;
