/// Model-evaluation abstraction used by
/// [`spectrum_from_model`](crate::manipulation::spectrum_from_model).
///
/// A [`FluxModel`] produces flux values from spectral-axis samples. Models
/// come in two flavours: unit-unaware models work on bare magnitudes and
/// inherit the spectrum's flux unit, while unit-aware models (anything
/// wrapped in [`Quantified`], or a custom implementation) receive the axis
/// with its unit and report their own native flux unit.
pub mod models;

use crate::spectra::{FluxUnit, SpectralAxisUnit};

// ---------------------------------------------------------------------------
// FluxModel trait
// ---------------------------------------------------------------------------

/// A mathematical model evaluated over a spectral axis.
///
/// Contract: `evaluate` and `evaluate_quantity` return exactly one flux
/// value per input sample.
pub trait FluxModel {
    /// Whether the model interprets its inputs as unit-bearing quantities.
    fn uses_quantity(&self) -> bool {
        false
    }

    /// Evaluate on bare spectral-axis magnitudes.
    fn evaluate(&self, spectral_axis: &[f64]) -> Vec<f64>;

    /// Evaluate on a unit-bearing axis, returning the flux values and their
    /// unit. Implementations may convert the axis to their native unit
    /// first. Only called when [`FluxModel::uses_quantity`] is true.
    fn evaluate_quantity(
        &self,
        spectral_axis: &[f64],
        unit: SpectralAxisUnit,
    ) -> (Vec<f64>, FluxUnit) {
        let _ = unit;
        (self.evaluate(spectral_axis), FluxUnit::Dimensionless)
    }
}

// ---------------------------------------------------------------------------
// Quantified – make any model unit-aware
// ---------------------------------------------------------------------------

/// Adapter that attaches declared units to an inner model, making it
/// unit-aware: the incoming axis is converted to `axis_unit` before the
/// inner model sees it, and the output carries `flux_unit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantified<M> {
    pub model: M,
    /// Unit the inner model expects its axis values in.
    pub axis_unit: SpectralAxisUnit,
    /// Unit of the flux the inner model produces.
    pub flux_unit: FluxUnit,
}

impl<M: FluxModel> FluxModel for Quantified<M> {
    fn uses_quantity(&self) -> bool {
        true
    }

    fn evaluate(&self, spectral_axis: &[f64]) -> Vec<f64> {
        self.model.evaluate(spectral_axis)
    }

    fn evaluate_quantity(
        &self,
        spectral_axis: &[f64],
        unit: SpectralAxisUnit,
    ) -> (Vec<f64>, FluxUnit) {
        let native = unit.convert(spectral_axis, self.axis_unit);
        (self.model.evaluate(&native), self.flux_unit)
    }
}

pub use models::{Gaussian1D, Linear};
