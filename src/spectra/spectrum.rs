use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::SpectrumError;

// ---------------------------------------------------------------------------
// Unit enums – labels plus a scale factor, nothing more
// ---------------------------------------------------------------------------

/// Unit of the spectral (wavelength) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpectralAxisUnit {
    Angstrom,
    Nanometer,
    Micron,
}

impl SpectralAxisUnit {
    /// Scale factor from this unit to Angstroms.
    pub fn angstroms_per_unit(self) -> f64 {
        match self {
            SpectralAxisUnit::Angstrom => 1.0,
            SpectralAxisUnit::Nanometer => 10.0,
            SpectralAxisUnit::Micron => 1.0e4,
        }
    }

    /// Convert a single magnitude expressed in this unit into `target`.
    pub fn convert_value(self, value: f64, target: SpectralAxisUnit) -> f64 {
        if self == target {
            value
        } else {
            value * self.angstroms_per_unit() / target.angstroms_per_unit()
        }
    }

    /// Convert a slice of magnitudes expressed in this unit into `target`.
    pub fn convert(self, values: &[f64], target: SpectralAxisUnit) -> Vec<f64> {
        if self == target {
            return values.to_vec();
        }
        let factor = self.angstroms_per_unit() / target.angstroms_per_unit();
        values.iter().map(|v| v * factor).collect()
    }
}

impl fmt::Display for SpectralAxisUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectralAxisUnit::Angstrom => write!(f, "Angstrom"),
            SpectralAxisUnit::Nanometer => write!(f, "nm"),
            SpectralAxisUnit::Micron => write!(f, "um"),
        }
    }
}

/// Unit of the flux axis. Carried as a label; no flux-unit conversion
/// happens inside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluxUnit {
    Jansky,
    /// erg s^-1 cm^-2 Angstrom^-1
    ErgFlux,
    Adu,
    Dimensionless,
}

impl fmt::Display for FluxUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FluxUnit::Jansky => write!(f, "Jy"),
            FluxUnit::ErgFlux => write!(f, "erg / (s cm2 Angstrom)"),
            FluxUnit::Adu => write!(f, "adu"),
            FluxUnit::Dimensionless => write!(f, ""),
        }
    }
}

/// Convention used to convert the spectral axis to velocities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityConvention {
    Optical,
    Radio,
    Relativistic,
}

// ---------------------------------------------------------------------------
// MetadataValue – a single free-form header/metadata entry
// ---------------------------------------------------------------------------

/// A dynamically-typed metadata value mirroring common FITS header dtypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// ISO-8601 date string kept as text for simplicity.
    Date(String),
    Null,
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "{s}"),
            MetadataValue::Integer(i) => write!(f, "{i}"),
            MetadataValue::Float(v) => write!(f, "{v:.4}"),
            MetadataValue::Bool(b) => write!(f, "{b}"),
            MetadataValue::Date(d) => write!(f, "{d}"),
            MetadataValue::Null => write!(f, "<null>"),
        }
    }
}

impl MetadataValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetadataValue::Float(v) => Some(*v),
            MetadataValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Spectrum – one 1-D spectrum
// ---------------------------------------------------------------------------

/// A single one-dimensional spectrum: a strictly increasing spectral axis
/// with a parallel flux array, optional per-sample standard-deviation
/// uncertainty, optional velocity metadata, and free-form header metadata.
///
/// Fields are public for direct access; [`Spectrum::new`] and
/// [`Spectrum::validate`] enforce the structural invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Wavelength samples, strictly increasing.
    pub spectral_axis: Vec<f64>,
    /// Unit of `spectral_axis`.
    pub axis_unit: SpectralAxisUnit,
    /// Flux samples – same length as `spectral_axis`.
    pub flux: Vec<f64>,
    /// Unit of `flux`.
    pub flux_unit: FluxUnit,
    /// Per-sample standard deviation of `flux`, same unit and length.
    pub uncertainty: Option<Vec<f64>>,
    /// Convention for velocity conversion of the spectral axis.
    pub velocity_convention: Option<VelocityConvention>,
    /// Rest wavelength of the line of interest, in `axis_unit`.
    pub rest_value: Option<f64>,
    /// Free-form metadata: header keyword → value.
    pub meta: BTreeMap<String, MetadataValue>,
}

impl Spectrum {
    /// Build a spectrum from a spectral axis and flux array, validating the
    /// structural invariants. Uncertainty and metadata start empty.
    pub fn new(
        spectral_axis: Vec<f64>,
        axis_unit: SpectralAxisUnit,
        flux: Vec<f64>,
        flux_unit: FluxUnit,
    ) -> Result<Self, SpectrumError> {
        let spectrum = Spectrum {
            spectral_axis,
            axis_unit,
            flux,
            flux_unit,
            uncertainty: None,
            velocity_convention: None,
            rest_value: None,
            meta: BTreeMap::new(),
        };
        spectrum.validate()?;
        Ok(spectrum)
    }

    /// Attach a standard-deviation uncertainty array.
    pub fn with_uncertainty(mut self, uncertainty: Vec<f64>) -> Result<Self, SpectrumError> {
        if uncertainty.len() != self.flux.len() {
            return Err(SpectrumError::UncertaintyLength {
                got: uncertainty.len(),
                expected: self.flux.len(),
            });
        }
        self.uncertainty = Some(uncertainty);
        Ok(self)
    }

    /// Check the structural invariants. Useful after mutating the public
    /// fields directly.
    pub fn validate(&self) -> Result<(), SpectrumError> {
        if self.spectral_axis.len() != self.flux.len() {
            return Err(SpectrumError::LengthMismatch {
                axis: self.spectral_axis.len(),
                flux: self.flux.len(),
            });
        }
        if let Some(unc) = &self.uncertainty {
            if unc.len() != self.flux.len() {
                return Err(SpectrumError::UncertaintyLength {
                    got: unc.len(),
                    expected: self.flux.len(),
                });
            }
        }
        for (i, &w) in self.spectral_axis.iter().enumerate() {
            if !w.is_finite() {
                return Err(SpectrumError::NonFiniteSample { index: i, value: w });
            }
            if i > 0 && w <= self.spectral_axis[i - 1] {
                return Err(SpectrumError::NonMonotonicAxis { index: i });
            }
        }
        Ok(())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.spectral_axis.len()
    }

    /// Whether the spectrum has no samples.
    pub fn is_empty(&self) -> bool {
        self.spectral_axis.is_empty()
    }
}
