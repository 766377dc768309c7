//! Reading multi-band rasters into a [`BandSet`](crate::raster::BandSet)

#[cfg(feature = "gdal")]
mod gdal_io;
mod native;

#[cfg(feature = "gdal")]
pub use gdal_io::read_bands;

#[cfg(not(feature = "gdal"))]
pub use native::read_bands;

// Buffer-based I/O (always available, no filesystem dependency)
pub use native::read_bands_from_buffer;

use crate::raster::BandRole;

/// Which 1-based band number in the file supplies each role
pub type BandMapping = [(BandRole, usize)];
