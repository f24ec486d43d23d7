use thiserror::Error;

// ---------------------------------------------------------------------------
// SpectrumError – violations of the Spectrum invariants
// ---------------------------------------------------------------------------

/// Errors raised when a [`Spectrum`](super::Spectrum) violates its structural
/// invariants: parallel axis/flux arrays of equal length, strictly increasing
/// finite axis samples, and a matching uncertainty length when present.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectrumError {
    #[error("spectral axis has {axis} samples but flux has {flux}")]
    LengthMismatch { axis: usize, flux: usize },

    #[error("uncertainty has {got} values, expected {expected}")]
    UncertaintyLength { got: usize, expected: usize },

    #[error("spectral axis must be strictly increasing (violated at index {index})")]
    NonMonotonicAxis { index: usize },

    #[error("spectral axis sample {index} is not finite ({value})")]
    NonFiniteSample { index: usize, value: f64 },
}

// ---------------------------------------------------------------------------
// RegionError – malformed spectral regions
// ---------------------------------------------------------------------------

/// Error raised when constructing a [`SpectralRegion`](super::SpectralRegion)
/// with unusable bounds.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegionError {
    #[error("invalid region bounds [{lower}, {upper}): lower must be finite and below upper")]
    InvalidBounds { lower: f64, upper: f64 },
}
