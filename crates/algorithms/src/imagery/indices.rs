//! Water and salt-crust spectral indices
//!
//! Both indices take single-band reflectance rasters of identical shape and
//! return an index raster of that shape with every NaN replaced by zero.

use ndarray::Zip;
use surfarea_core::raster::Raster;
use surfarea_core::Result;

/// Parameters for the salt-crust index
#[derive(Debug, Clone)]
pub struct SciParams {
    /// Weight applied to the infrared difference term (default: 0.3)
    pub infrared_weight: f64,
}

impl Default for SciParams {
    fn default() -> Self {
        Self {
            infrared_weight: 0.3,
        }
    }
}

// ---------------------------------------------------------------------------
// NDWI
// ---------------------------------------------------------------------------

/// Normalized Difference Water Index (McFeeters, 1996)
///
/// `NDWI = (Green - NIR) / (Green + NIR)`
///
/// Values lie in [-1, 1] for non-negative reflectances. Where the
/// denominator is exactly zero the index is 0, and any NaN produced by
/// non-finite inputs is replaced by 0.
///
/// # Arguments
/// * `green` - Green band
/// * `nir` - Near-infrared band
pub fn ndwi(green: &Raster<f64>, nir: &Raster<f64>) -> Result<Raster<f64>> {
    let mut index = green.zip_map(nir, |g, n| {
        let sum = g + n;
        if sum == 0.0 {
            0.0
        } else {
            (g - n) / sum
        }
    })?;
    index.replace_nan(0.0);
    Ok(index)
}

// ---------------------------------------------------------------------------
// SCI
// ---------------------------------------------------------------------------

/// Salt-crust index weighted by green reflectance
///
/// ```text
/// raw = (Red - Green) - w * ((NIR - SWIR) - (Red - SWIR))
/// SCI = max(raw, 0) * Green
/// ```
///
/// `w` is [`SciParams::infrared_weight`]. NaN cells in the result are set to 0.
///
/// # Arguments
/// * `red` - Red band
/// * `green` - Green band
/// * `nir` - Near-infrared band
/// * `swir` - Shortwave infrared band
pub fn sci(
    red: &Raster<f64>,
    green: &Raster<f64>,
    nir: &Raster<f64>,
    swir: &Raster<f64>,
    params: &SciParams,
) -> Result<Raster<f64>> {
    red.ensure_same_shape(green)?;
    red.ensure_same_shape(nir)?;
    red.ensure_same_shape(swir)?;

    let w = params.infrared_weight;
    let data = Zip::from(red.data())
        .and(green.data())
        .and(nir.data())
        .and(swir.data())
        .map_collect(|&r, &g, &n, &s| {
            let raw = (r - g) - w * ((n - s) - (r - s));
            // NaN compares false here and survives to replace_nan
            let clamped = if raw < 0.0 { 0.0 } else { raw };
            clamped * g
        });

    let mut index = Raster::from_array(data);
    index.replace_nan(0.0);
    Ok(index)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
