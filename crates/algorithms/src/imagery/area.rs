//! Converting a class mask to a physical area

use crate::imagery::ClassMask;

/// Number of cells assigned to the class
pub fn pixel_count(mask: &ClassMask) -> usize {
    mask.count_true()
}

/// Total class area in square meters: `pixel_count * pixel_area`.
///
/// `pixel_area` is the ground area of one cell in square meters.
pub fn class_area(mask: &ClassMask, pixel_area: f64) -> f64 {
    pixel_count(mask) as f64 * pixel_area
}
