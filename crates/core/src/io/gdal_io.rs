//! Multi-band GeoTIFF reading using GDAL

use crate::error::{Error, Result};
use crate::io::BandMapping;
use crate::raster::{BandSet, Raster};
use gdal::Dataset;
use std::path::Path;

/// Read the bands named in `mapping` from any raster GDAL can open.
///
/// # Arguments
/// * `path` - Path to the raster file
/// * `mapping` - Band role to 1-indexed GDAL band number
///
/// The dataset is closed when this returns.
///
/// # Example
/// ```ignore
/// let bands = read_bands("LT05_2003.tif", &[(BandRole::Green, 2), (BandRole::Nir, 4)])?;
/// ```
pub fn read_bands<P>(path: P, mapping: &BandMapping) -> Result<BandSet>
where
    P: AsRef<Path>,
{
    let dataset = Dataset::open(path.as_ref())?;
    let available = dataset.raster_count() as usize;

    let mut set = BandSet::new();
    for &(role, band) in mapping {
        if band == 0 || band > available {
            return Err(Error::BandOutOfRange { band, available });
        }
        let rasterband = dataset.rasterband(band)?;
        let (cols, rows) = rasterband.size();
        let buffer = rasterband.read_as::<f64>((0, 0), (cols, rows), (cols, rows), None)?;
        set.insert(role, Raster::from_vec(buffer.data().to_vec(), rows, cols)?);
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::BandRole;

    #[test]
    fn test_missing_dataset() {
        let mapping = [(BandRole::Green, 1)];
        assert!(matches!(
            read_bands("/nonexistent/scene_1999.tif", &mapping),
            Err(Error::Gdal(_))
        ));
    }
}
