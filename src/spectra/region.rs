use serde::{Deserialize, Serialize};

use super::errors::RegionError;
use super::spectrum::SpectralAxisUnit;

// ---------------------------------------------------------------------------
// SpectralRegion – a half-open window on the spectral axis
// ---------------------------------------------------------------------------

/// A half-open wavelength interval `[lower, upper)` on the spectral axis,
/// expressed in its own unit so regions can be defined independently of any
/// particular spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralRegion {
    pub lower: f64,
    pub upper: f64,
    pub unit: SpectralAxisUnit,
}

impl SpectralRegion {
    /// Build a region, rejecting empty or non-finite bounds.
    pub fn new(lower: f64, upper: f64, unit: SpectralAxisUnit) -> Result<Self, RegionError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(RegionError::InvalidBounds { lower, upper });
        }
        Ok(SpectralRegion { lower, upper, unit })
    }

    /// Whether a wavelength (in this region's unit) falls inside the region.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value < self.upper
    }

    /// The same region with bounds expressed in `target`.
    pub fn to_unit(&self, target: SpectralAxisUnit) -> SpectralRegion {
        SpectralRegion {
            lower: self.unit.convert_value(self.lower, target),
            upper: self.unit.convert_value(self.upper, target),
            unit: target,
        }
    }
}
