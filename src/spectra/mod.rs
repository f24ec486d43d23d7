/// Spectral data layer: core types and their invariants.
///
/// Architecture:
/// ```text
///   ┌────────────┐
///   │  Spectrum   │  spectral_axis + flux (+ uncertainty, meta)
///   └────────────┘
///         │
///         ▼
///   ┌──────────────┐
///   │ SpectralRegion│  half-open [lower, upper) window on the axis
///   └──────────────┘
/// ```
pub mod errors;
pub mod region;
pub mod spectrum;

pub use errors::{RegionError, SpectrumError};
pub use region::SpectralRegion;
pub use spectrum::{
    FluxUnit, MetadataValue, Spectrum, SpectralAxisUnit, VelocityConvention,
};
