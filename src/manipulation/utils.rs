use crate::modeling::FluxModel;
use crate::spectra::{SpectralRegion, Spectrum};

use super::errors::ExciseError;

// ---------------------------------------------------------------------------
// linear_exciser – replace one window with a linear ramp
// ---------------------------------------------------------------------------

/// Replace the flux inside `region` with a linear ramp between the samples
/// immediately outside the region.
///
/// The matched index range is extended by one sample on each side (clamped
/// to the array bounds) and the flux over the extended range is overwritten
/// with evenly spaced values between the two boundary fluxes. Axis,
/// uncertainty, and metadata are carried over unchanged. Region bounds given
/// in a different axis unit are converted before matching.
///
/// Other excision strategies can be supplied to
/// [`excise_region_with`] / [`excise_regions_with`] in place of this one.
pub fn linear_exciser(
    spectrum: &Spectrum,
    region: &SpectralRegion,
) -> Result<Spectrum, ExciseError> {
    let bounds = region.to_unit(spectrum.axis_unit);

    // Indices of axis samples falling inside [lower, upper). The axis is
    // strictly increasing, so the matches are contiguous.
    let mut matched = spectrum
        .spectral_axis
        .iter()
        .enumerate()
        .filter(|(_, &w)| bounds.contains(w))
        .map(|(i, _)| i);

    let first = matched.next().ok_or(ExciseError::EmptyRegion {
        lower: region.lower,
        upper: region.upper,
    })?;
    let last = matched.last().unwrap_or(first);

    // Extend one sample each side, clamped to the array bounds.
    let s = first.saturating_sub(1);
    let e = (last + 1).min(spectrum.spectral_axis.len() - 1);
    log::trace!("linear excise over samples {s}..{e} (matched {first}..={last})");

    let mut flux = spectrum.flux.clone();
    let ramp = linspace(flux[s], flux[e], e - s);
    flux[s..e].copy_from_slice(&ramp);

    Ok(Spectrum {
        flux,
        ..spectrum.clone()
    })
}

/// Evenly spaced values from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num).map(|i| start + step * i as f64).collect()
        }
    }
}

// ---------------------------------------------------------------------------
// excise_region / excise_regions – validation + strategy dispatch
// ---------------------------------------------------------------------------

/// Excise a single region with the default [`linear_exciser`].
pub fn excise_region(
    spectrum: &Spectrum,
    region: &SpectralRegion,
) -> Result<Spectrum, ExciseError> {
    excise_region_with(spectrum, region, linear_exciser)
}

/// Excise a single region with a caller-supplied exciser strategy.
///
/// The spectrum's structural invariants are checked before the strategy
/// runs.
pub fn excise_region_with<F>(
    spectrum: &Spectrum,
    region: &SpectralRegion,
    exciser: F,
) -> Result<Spectrum, ExciseError>
where
    F: Fn(&Spectrum, &SpectralRegion) -> Result<Spectrum, ExciseError>,
{
    spectrum.validate()?;
    exciser(spectrum, region)
}

/// Excise a list of regions sequentially with the default
/// [`linear_exciser`].
pub fn excise_regions(
    spectrum: &Spectrum,
    regions: &[SpectralRegion],
) -> Result<Spectrum, ExciseError> {
    excise_regions_with(spectrum, regions, linear_exciser)
}

/// Excise a list of regions sequentially with a caller-supplied exciser
/// strategy, threading the intermediate spectrum through each call.
pub fn excise_regions_with<F>(
    spectrum: &Spectrum,
    regions: &[SpectralRegion],
    exciser: F,
) -> Result<Spectrum, ExciseError>
where
    F: Fn(&Spectrum, &SpectralRegion) -> Result<Spectrum, ExciseError>,
{
    spectrum.validate()?;
    log::debug!("excising {} region(s)", regions.len());

    let mut result = spectrum.clone();
    for region in regions {
        result = exciser(&result, region)?;
    }
    Ok(result)
}

// ---------------------------------------------------------------------------
// spectrum_from_model – recompute flux from a model
// ---------------------------------------------------------------------------

/// Build a new spectrum whose flux is `model` evaluated over `spectrum`'s
/// spectral axis.
///
/// Unit-aware models are evaluated on the axis with its unit and report
/// their own flux unit; unit-unaware models are evaluated on the bare
/// magnitudes and the input spectrum's flux unit is attached to the result.
/// The axis, velocity metadata, and header metadata are carried over; the
/// uncertainty is dropped since it is not valid for the recomputed flux.
pub fn spectrum_from_model<M>(model: &M, spectrum: &Spectrum) -> Spectrum
where
    M: FluxModel + ?Sized,
{
    let (flux, flux_unit) = if model.uses_quantity() {
        model.evaluate_quantity(&spectrum.spectral_axis, spectrum.axis_unit)
    } else {
        (model.evaluate(&spectrum.spectral_axis), spectrum.flux_unit)
    };

    Spectrum {
        spectral_axis: spectrum.spectral_axis.clone(),
        axis_unit: spectrum.axis_unit,
        flux,
        flux_unit,
        uncertainty: None,
        velocity_convention: spectrum.velocity_convention,
        rest_value: spectrum.rest_value,
        meta: spectrum.meta.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modeling::{Gaussian1D, Linear, Quantified};
    use crate::spectra::{FluxUnit, MetadataValue, SpectralAxisUnit};

    fn sample_spectrum() -> Spectrum {
        let axis: Vec<f64> = (0..10).map(|i| 5000.0 + 10.0 * i as f64).collect();
        let flux = vec![1.0, 1.1, 0.9, 5.0, 7.5, 6.0, 1.2, 1.0, 0.8, 1.1];
        let mut sp = Spectrum::new(axis, SpectralAxisUnit::Angstrom, flux, FluxUnit::Jansky)
            .unwrap()
            .with_uncertainty(vec![0.05; 10])
            .unwrap();
        sp.meta
            .insert("OBJECT".into(), MetadataValue::String("NGC 1275".into()));
        sp
    }

    #[test]
    fn linspace_matches_endpoints() {
        assert_eq!(linspace(0.0, 1.0, 0), Vec::<f64>::new());
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
        let v = linspace(1.0, 3.0, 5);
        assert_eq!(v, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    }

    #[test]
    fn linear_exciser_ramps_between_boundaries() {
        let sp = sample_spectrum();
        // Covers samples 3..=5 (5030, 5040, 5050); extended range is 2..=6.
        let region = SpectralRegion::new(5030.0, 5060.0, SpectralAxisUnit::Angstrom).unwrap();
        let out = linear_exciser(&sp, &region).unwrap();

        assert_eq!(out.len(), sp.len());
        assert_eq!(out.spectral_axis, sp.spectral_axis);
        // Ramp endpoints are the boundary fluxes.
        assert!((out.flux[2] - 0.9).abs() < 1e-12);
        assert!((out.flux[6] - 1.2).abs() < 1e-12);
        // Samples outside the extended range are untouched.
        assert_eq!(out.flux[0], sp.flux[0]);
        assert_eq!(out.flux[8], sp.flux[8]);
        // Metadata and uncertainty carried over; the input is not mutated.
        assert_eq!(out.uncertainty, sp.uncertainty);
        assert_eq!(out.meta, sp.meta);
        assert_eq!(sp.flux[4], 7.5);
    }

    #[test]
    fn linear_exciser_replacement_is_monotonic() {
        let sp = sample_spectrum();
        let region = SpectralRegion::new(5030.0, 5060.0, SpectralAxisUnit::Angstrom).unwrap();
        let out = linear_exciser(&sp, &region).unwrap();
        // flux[2] = 0.9 < flux[6] = 1.2, so the ramp increases.
        for w in out.flux[2..=6].windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn empty_region_is_an_error() {
        let sp = sample_spectrum();
        // Entirely above the axis range.
        let region = SpectralRegion::new(9000.0, 9100.0, SpectralAxisUnit::Angstrom).unwrap();
        let err = excise_region(&sp, &region).unwrap_err();
        assert_eq!(err, ExciseError::EmptyRegion { lower: 9000.0, upper: 9100.0 });
    }

    #[test]
    fn region_unit_is_converted_before_matching() {
        let sp = sample_spectrum();
        let in_angstrom = SpectralRegion::new(5030.0, 5060.0, SpectralAxisUnit::Angstrom).unwrap();
        let in_nm = SpectralRegion::new(503.0, 506.0, SpectralAxisUnit::Nanometer).unwrap();
        let a = excise_region(&sp, &in_angstrom).unwrap();
        let b = excise_region(&sp, &in_nm).unwrap();
        assert_eq!(a.flux, b.flux);
    }

    #[test]
    fn excise_regions_equals_sequential_applications() {
        let sp = sample_spectrum();
        let regions = [
            SpectralRegion::new(5010.0, 5030.0, SpectralAxisUnit::Angstrom).unwrap(),
            SpectralRegion::new(5050.0, 5080.0, SpectralAxisUnit::Angstrom).unwrap(),
        ];
        let batched = excise_regions(&sp, &regions).unwrap();
        let sequential = {
            let step = excise_region(&sp, &regions[0]).unwrap();
            excise_region(&step, &regions[1]).unwrap()
        };
        assert_eq!(batched, sequential);
    }

    #[test]
    fn excise_region_with_accepts_custom_strategy() {
        let sp = sample_spectrum();
        let region = SpectralRegion::new(5030.0, 5060.0, SpectralAxisUnit::Angstrom).unwrap();
        // Strategy that zeroes the matched window instead of ramping.
        let zeroing = |spectrum: &Spectrum, region: &SpectralRegion| {
            let bounds = region.to_unit(spectrum.axis_unit);
            let mut flux = spectrum.flux.clone();
            for (i, &w) in spectrum.spectral_axis.iter().enumerate() {
                if bounds.contains(w) {
                    flux[i] = 0.0;
                }
            }
            Ok(Spectrum { flux, ..spectrum.clone() })
        };
        let out = excise_region_with(&sp, &region, zeroing).unwrap();
        assert_eq!(out.flux[3..=5], [0.0, 0.0, 0.0]);
        assert_eq!(out.flux[0], sp.flux[0]);
    }

    #[test]
    fn excise_rejects_invalid_spectrum() {
        let mut sp = sample_spectrum();
        sp.flux.pop();
        let region = SpectralRegion::new(5030.0, 5060.0, SpectralAxisUnit::Angstrom).unwrap();
        assert!(matches!(
            excise_region(&sp, &region),
            Err(ExciseError::Spectrum(_))
        ));
    }

    #[test]
    fn spectrum_from_unitless_model_inherits_flux_unit() {
        let sp = sample_spectrum();
        let model = Gaussian1D { amplitude: 2.0, mean: 5040.0, stddev: 20.0 };
        let out = spectrum_from_model(&model, &sp);

        assert_eq!(out.spectral_axis, sp.spectral_axis);
        assert_eq!(out.axis_unit, sp.axis_unit);
        assert_eq!(out.flux_unit, sp.flux_unit);
        assert!(out.uncertainty.is_none());
        assert_eq!(out.meta, sp.meta);
        assert_eq!(out.flux, model.evaluate(&sp.spectral_axis));
    }

    #[test]
    fn spectrum_from_quantity_model_uses_native_units() {
        let sp = sample_spectrum();
        let model = Quantified {
            model: Linear { slope: 0.001, intercept: 0.0 },
            axis_unit: SpectralAxisUnit::Nanometer,
            flux_unit: FluxUnit::ErgFlux,
        };
        let out = spectrum_from_model(&model, &sp);

        // 5000 Angstrom = 500 nm, so the first flux sample is 0.5.
        assert!((out.flux[0] - 0.5).abs() < 1e-12);
        assert_eq!(out.flux_unit, FluxUnit::ErgFlux);
        assert!(out.uncertainty.is_none());
    }
}
