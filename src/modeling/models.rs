use super::FluxModel;

// ---------------------------------------------------------------------------
// Reference models
// ---------------------------------------------------------------------------

/// A 1-D Gaussian profile: `amplitude * exp(-(x - mean)^2 / (2 stddev^2))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian1D {
    pub amplitude: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl FluxModel for Gaussian1D {
    fn evaluate(&self, spectral_axis: &[f64]) -> Vec<f64> {
        let two_var = 2.0 * self.stddev * self.stddev;
        spectral_axis
            .iter()
            .map(|&x| {
                let d = x - self.mean;
                self.amplitude * (-(d * d) / two_var).exp()
            })
            .collect()
    }
}

/// A straight line: `slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    pub slope: f64,
    pub intercept: f64,
}

impl FluxModel for Linear {
    fn evaluate(&self, spectral_axis: &[f64]) -> Vec<f64> {
        spectral_axis
            .iter()
            .map(|&x| self.slope * x + self.intercept)
            .collect()
    }
}
