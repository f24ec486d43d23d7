use thiserror::Error;

use crate::spectra::SpectrumError;

// ---------------------------------------------------------------------------
// ExciseError – failures while excising spectral regions
// ---------------------------------------------------------------------------

/// Errors raised by the excision routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExciseError {
    /// The region selects no samples on the spectrum's spectral axis.
    /// Bounds are reported in the region's own unit.
    #[error("region [{lower}, {upper}) matches no samples on the spectral axis")]
    EmptyRegion { lower: f64, upper: f64 },

    /// The input spectrum violates its structural invariants.
    #[error(transparent)]
    Spectrum(#[from] SpectrumError),
}
