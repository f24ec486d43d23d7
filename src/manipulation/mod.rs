/// Manipulation layer: transforms that take a spectrum and return a new one.
///
/// ```text
///   ┌────────────┐   excise_region(s)    ┌────────────┐
///   │  Spectrum   │ ────────────────────▶ │  Spectrum   │  flux ramped over regions
///   └────────────┘   spectrum_from_model  └────────────┘  or recomputed from a model
/// ```
///
/// Every transform leaves its input untouched and returns a fresh
/// [`Spectrum`](crate::spectra::Spectrum).
pub mod errors;
pub mod utils;

pub use errors::ExciseError;
pub use utils::{
    excise_region, excise_region_with, excise_regions, excise_regions_with, linear_exciser,
    spectrum_from_model,
};
