//! Raster element trait for generic cell values

use std::fmt::Debug;

/// Trait for types that can be stored in a raster cell.
///
/// Reflectance bands and index grids hold `f64`; class masks hold `bool`.
pub trait RasterElement: Copy + Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Value a freshly allocated grid is filled with
    fn empty() -> Self;
}

impl RasterElement for f64 {
    fn empty() -> Self {
        0.0
    }
}

impl RasterElement for bool {
    fn empty() -> Self {
        false
    }
}
