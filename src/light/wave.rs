use std::f64::consts::PI;

use serde::Serialize;

use crate::error::{Error, Result};

/// Default spatial domain, two full turns.
pub const DEFAULT_DOMAIN_LENGTH: f64 = 4.0 * PI;
/// Default number of sample points per trace.
pub const DEFAULT_SAMPLES: usize = 500;
/// Amplitude used for the light trace in the sea-vs-light comparison.
///
/// Purely visual separation between the two curves; it is not derived from
/// any physical quantity.
pub const COMPARISON_AMPLITUDE: f64 = 0.3;
/// Frequencies are divided by this before being used as the oscillation
/// frequency of the light trace.
pub const LIGHT_FREQUENCY_DIVISOR: f64 = 1e14;

/// A sampled sinusoid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaveTrace {
    pub domain: Vec<f64>,
    pub amplitude: Vec<f64>,
}

impl WaveTrace {
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.domain.iter().copied().zip(self.amplitude.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSampler {
    domain_length: f64,
    sample_count: usize,
    amplitude_scale: f64,
}

impl Default for WaveSampler {
    fn default() -> Self {
        Self {
            domain_length: DEFAULT_DOMAIN_LENGTH,
            sample_count: DEFAULT_SAMPLES,
            amplitude_scale: 1.0,
        }
    }
}

impl WaveSampler {
    pub fn with_domain_length(mut self, domain_length: f64) -> Self {
        self.domain_length = domain_length;
        self
    }

    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Scale the curve for display. Has no physical meaning.
    pub fn with_amplitude_scale(mut self, amplitude_scale: f64) -> Self {
        self.amplitude_scale = amplitude_scale;
        self
    }

    /// `amplitude[i] = scale · sin(k · x[i])` over `sample_count` evenly
    /// spaced points spanning `[0, domain_length]`.
    pub fn sample(&self, oscillation_frequency: f64) -> Result<WaveTrace> {
        if self.sample_count < 2 {
            return Err(Error::InvalidSampleCount(self.sample_count));
        }
        let step = self.domain_length / (self.sample_count - 1) as f64;
        let domain: Vec<f64> = (0..self.sample_count).map(|i| i as f64 * step).collect();
        let amplitude = domain
            .iter()
            .map(|x| self.amplitude_scale * (oscillation_frequency * x).sin())
            .collect();
        Ok(WaveTrace { domain, amplitude })
    }
}

/// A slow reference wave next to a wave at the light's (scaled) frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveComparison {
    pub reference: WaveTrace,
    pub light: WaveTrace,
    /// Oscillation frequency used for the light trace.
    pub light_oscillation: f64,
}

impl WaveComparison {
    pub fn build(
        sampler: &WaveSampler,
        light_frequency_hz: f64,
        light_amplitude: f64,
    ) -> Result<Self> {
        let light_oscillation = light_frequency_hz / LIGHT_FREQUENCY_DIVISOR;
        let reference = sampler.with_amplitude_scale(1.0).sample(1.0)?;
        let light = sampler.with_amplitude_scale(light_amplitude).sample(light_oscillation)?;
        Ok(Self { reference, light, light_oscillation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain() {
        let t = WaveSampler::default().sample(1.0).unwrap();
        assert_eq!(t.len(), 500);
        assert_eq!(t.domain[0], 0.0);
        assert!((t.domain[499] - 4.0 * PI).abs() < 1e-12);
        assert_eq!(t.amplitude[0], 0.0);
    }

    #[test]
    fn test_amplitude_scale() {
        let t = WaveSampler::default()
            .with_sample_count(5)
            .with_domain_length(PI)
            .with_amplitude_scale(0.3)
            .sample(1.0)
            .unwrap();
        // x = pi/2 at index 2
        assert!((t.amplitude[2] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_sample_count_guard() {
        for n in [0, 1] {
            let err = WaveSampler::default().with_sample_count(n).sample(1.0).unwrap_err();
            assert!(matches!(err, Error::InvalidSampleCount(c) if c == n));
        }
        assert_eq!(WaveSampler::default().with_sample_count(2).sample(1.0).unwrap().len(), 2);
    }

    #[test]
    fn test_deterministic() {
        let s = WaveSampler::default();
        let a = s.sample(6.38).unwrap();
        let b = s.sample(6.38).unwrap();
        assert_eq!(a, b);
        let bits = |t: &WaveTrace| t.amplitude.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a), bits(&b));
    }

    #[test]
    fn test_comparison() {
        let sampler = WaveSampler::default();
        let cmp = WaveComparison::build(&sampler, 6.0e14, COMPARISON_AMPLITUDE).unwrap();
        assert!((cmp.light_oscillation - 6.0).abs() < 1e-12);
        let peak = cmp.light.amplitude.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        assert!(peak <= COMPARISON_AMPLITUDE + 1e-12);
        assert!(peak > 0.29);
        let ref_peak = cmp.reference.amplitude.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        assert!(ref_peak > 0.99);
    }
}
