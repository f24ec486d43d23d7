//! rusty-spectra – manipulation utilities for one-dimensional astronomical
//! spectra.
//!
//! A [`Spectrum`] pairs a strictly increasing wavelength axis with a flux
//! array plus optional uncertainty and metadata. The crate offers two
//! families of transforms over it:
//!
//! * excision – [`excise_region`] / [`excise_regions`] replace the flux
//!   inside one or more [`SpectralRegion`] windows using an exciser
//!   strategy, by default [`linear_exciser`] (a linear ramp between the
//!   boundary samples);
//! * model evaluation – [`spectrum_from_model`] recomputes a spectrum's
//!   flux from any [`FluxModel`], keeping the original axis and metadata.
//!
//! All transforms take their input by reference and return a new spectrum.
//! Fitting, convolution, I/O, and coordinate-system transforms are out of
//! scope.

pub mod manipulation;
pub mod modeling;
pub mod spectra;

pub use manipulation::{
    excise_region, excise_region_with, excise_regions, excise_regions_with, linear_exciser,
    spectrum_from_model, ExciseError,
};
pub use modeling::{FluxModel, Gaussian1D, Linear, Quantified};
pub use spectra::{
    FluxUnit, MetadataValue, RegionError, SpectralAxisUnit, SpectralRegion, Spectrum,
    SpectrumError, VelocityConvention,
};
