//! Spectral bands of a single image, keyed by role

use crate::error::{Error, Result};
use crate::raster::Raster;
use std::collections::BTreeMap;
use std::fmt;

/// The spectral role a band plays in an index formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BandRole {
    Green,
    /// Near-infrared
    Nir,
    Red,
    /// Short-wave infrared
    Swir,
}

impl BandRole {
    /// Short lowercase name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            BandRole::Green => "green",
            BandRole::Nir => "nir",
            BandRole::Red => "red",
            BandRole::Swir => "swir",
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reflectance bands read from one raster file.
///
/// Bands are stored as `f64` and may contain NaN or infinite values.
/// Shapes are not checked on insertion; index computations call
/// [`BandSet::ensure_same_shape`] for the roles they need.
#[derive(Debug, Clone, Default)]
pub struct BandSet {
    bands: BTreeMap<BandRole, Raster<f64>>,
}

impl BandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) the band for `role`
    pub fn insert(&mut self, role: BandRole, band: Raster<f64>) {
        self.bands.insert(role, band);
    }

    /// Builder-style [`BandSet::insert`]
    pub fn with(mut self, role: BandRole, band: Raster<f64>) -> Self {
        self.insert(role, band);
        self
    }

    /// Band for `role`, or [`Error::MissingBand`]
    pub fn get(&self, role: BandRole) -> Result<&Raster<f64>> {
        self.bands.get(&role).ok_or(Error::MissingBand(role))
    }

    /// Roles present, in role order
    pub fn roles(&self) -> impl Iterator<Item = BandRole> + '_ {
        self.bands.keys().copied()
    }

    /// Check that every role in `roles` is present and all share one shape.
    ///
    /// Returns that shape. The first role is the reference the others are
    /// compared against.
    pub fn ensure_same_shape(&self, roles: &[BandRole]) -> Result<(usize, usize)> {
        let Some((&first, rest)) = roles.split_first() else {
            return Err(Error::Other("no bands requested".into()));
        };
        let reference = self.get(first)?;
        for &role in rest {
            reference.ensure_same_shape(self.get(role)?)?;
        }
        Ok(reference.shape())
    }
}
